//! # 필드 검증 규칙 유틸리티
//!
//! 요청 검증기들이 공유하는 원자적 필드 규칙들입니다.
//! 모든 함수는 상태가 없는 순수 함수이며, 위반 시 필드별 메시지를 담은
//! `AppError::ValidationError`를 반환할 뿐 로깅이나 부수 효과가 없습니다.
//!
//! 숫자 변환은 명시적입니다: [`parse_number`]가 JSON 숫자와 숫자 형태의
//! 문자열만 `f64`로 변환하고, 그 외의 입력은 구분 가능한 `None`으로
//! 처리합니다. 암묵적 타입 강제에 의존하지 않습니다.

use serde_json::Value;
use validator::ValidationErrors;

use crate::core::errors::{AppError, AppResult};

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// assert!(is_valid_string("Hello"));
/// assert!(!is_valid_string("   "));
/// assert!(!is_valid_string(""));
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 값 존재 검사
///
/// 값이 없거나(필드 누락), null이거나, 공백 제거 후 빈 문자열이면
/// `{label}을(를) 입력해 주세요.` 메시지로 실패합니다.
/// 문자열이 아닌 값(숫자, 객체 등)은 존재하는 것으로 취급하며,
/// 타입 검사는 이후 단계의 규칙이 담당합니다.
pub fn require_present(value: Option<&Value>, label: &str) -> AppResult<()> {
    let missing = match value {
        None => true,
        Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    };

    if missing {
        return Err(AppError::ValidationError(format!(
            "{}을(를) 입력해 주세요.",
            label
        )));
    }
    Ok(())
}

/// 값이 문자열이며 공백 제거 후 내용이 있는지 검사
///
/// 문자열이 아닌 값(숫자, 배열 등)도 실패로 처리하므로 타입 혼동에 대한
/// 방어를 겸합니다. 실패 시 호출자가 지정한 메시지를 그대로 사용합니다.
pub fn require_non_empty_string(value: &Value, message: &str) -> AppResult<()> {
    match value.as_str() {
        Some(s) if is_valid_string(s) => Ok(()),
        _ => Err(AppError::ValidationError(message.to_string())),
    }
}

/// JSON 값을 숫자로 명시적으로 변환합니다
///
/// - JSON 숫자 → `f64`
/// - 숫자 형태의 문자열(`"5"`, `" 7.5 "`, `"0"`) → `f64`
/// - 그 외(빈 문자열, 일반 텍스트, bool, null, 배열 등) → `None`
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// 숫자 변환 후 폐구간 `[lo, hi]` 범위 검사
///
/// 변환 실패(숫자가 아닌 입력)와 범위 초과는 모두 동일한
/// `ValidationError`로 보고됩니다. 경계값은 포함됩니다.
pub fn require_number_in_range(value: &Value, lo: f64, hi: f64, label: &str) -> AppResult<f64> {
    match parse_number(value) {
        Some(n) if n >= lo && n <= hi => Ok(n),
        _ => Err(AppError::ValidationError(format!(
            "{}는 {}부터 {} 사이의 유효한 숫자여야 합니다.",
            label, lo, hi
        ))),
    }
}

/// validator 파생 검증 결과에서 첫 번째 메시지 하나를 추출합니다
///
/// 파생 검증은 모든 위반을 누적하지만, 클라이언트는 요청당 정확히 하나의
/// 메시지만 받는다는 계약을 유지해야 하므로 첫 메시지만 사용합니다.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "요청 값이 유효하지 않습니다".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_require_present() {
        assert!(require_present(Some(&json!("값")), "닉네임").is_ok());
        assert!(require_present(Some(&json!(0)), "점수").is_ok());
        assert!(require_present(Some(&json!("0")), "점수").is_ok());

        // 누락, null, 빈 문자열, 공백 문자열은 모두 실패
        assert!(require_present(None, "닉네임").is_err());
        assert!(require_present(Some(&Value::Null), "닉네임").is_err());
        assert!(require_present(Some(&json!("")), "닉네임").is_err());
        assert!(require_present(Some(&json!("   ")), "닉네임").is_err());
    }

    #[test]
    fn test_require_present_message_names_field() {
        let err = require_present(None, "트렌디 점수").unwrap_err();
        assert!(err.to_string().contains("트렌디 점수"));
    }

    #[test]
    fn test_require_non_empty_string() {
        assert!(require_non_empty_string(&json!("한줄평"), "msg").is_ok());

        assert!(require_non_empty_string(&json!(""), "msg").is_err());
        assert!(require_non_empty_string(&json!("   "), "msg").is_err());
        // 문자열이 아닌 값은 타입 혼동으로 거부
        assert!(require_non_empty_string(&json!(123), "msg").is_err());
        assert!(require_non_empty_string(&json!(["a"]), "msg").is_err());
        assert!(require_non_empty_string(&Value::Null, "msg").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(&json!(5)), Some(5.0));
        assert_eq!(parse_number(&json!(7.5)), Some(7.5));
        assert_eq!(parse_number(&json!("5")), Some(5.0));
        assert_eq!(parse_number(&json!(" 3 ")), Some(3.0));
        assert_eq!(parse_number(&json!("0")), Some(0.0));

        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&json!("")), None);
        assert_eq!(parse_number(&json!(true)), None);
        assert_eq!(parse_number(&Value::Null), None);
        assert_eq!(parse_number(&json!([5])), None);
    }

    #[test]
    fn test_require_number_in_range() {
        // 경계값 포함
        assert_eq!(require_number_in_range(&json!(0), 0.0, 10.0, "점수").unwrap(), 0.0);
        assert_eq!(require_number_in_range(&json!(10), 0.0, 10.0, "점수").unwrap(), 10.0);
        assert_eq!(require_number_in_range(&json!("5"), 0.0, 10.0, "점수").unwrap(), 5.0);

        // 범위 초과와 변환 실패는 모두 거부
        assert!(require_number_in_range(&json!(10.1), 0.0, 10.0, "점수").is_err());
        assert!(require_number_in_range(&json!(-1), 0.0, 10.0, "점수").is_err());
        assert!(require_number_in_range(&json!("abc"), 0.0, 10.0, "점수").is_err());
    }

    #[test]
    fn test_first_validation_message_single() {
        use validator::Validate;

        #[derive(Validate)]
        struct Query {
            #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
            page: u32,
        }

        let query = Query { page: 0 };
        let errors = query.validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "page는 1 이상이어야 합니다");
    }
}
