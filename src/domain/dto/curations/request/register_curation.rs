//! 큐레이팅 등록 요청 DTO
//!
//! `POST /api/styles/{style_id}/curations` 요청 본문을 매핑하고 검증합니다.
//!
//! 점수 필드는 JSON 숫자뿐 아니라 `"5"` 같은 숫자 문자열도 허용해야
//! 하므로 원시 JSON 값으로 받은 뒤 명시적인 변환 단계를 거칩니다.
//! 닉네임과 한줄 큐레이팅도 타입 검사가 검증 규칙의 일부이므로
//! 원시 값으로 받습니다.

use serde::Deserialize;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::utils::validation::{
    is_valid_string, require_non_empty_string, require_number_in_range, require_present,
};

/// 큐레이팅 점수의 하한 (포함)
pub const MIN_SCORE: f64 = 0.0;
/// 큐레이팅 점수의 상한 (포함)
pub const MAX_SCORE: f64 = 10.0;

/// 큐레이팅 등록 요청
///
/// - 트렌디/개성/실용성/가성비 점수 (숫자, 0~10)
/// - 한줄 큐레이팅 (문자열)
/// - 닉네임 (문자열)
/// - 비밀번호 (문자열)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCurationRequest {
    #[serde(default)]
    pub nickname: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub trendy: Option<Value>,
    #[serde(default)]
    pub personality: Option<Value>,
    #[serde(default)]
    pub practicality: Option<Value>,
    #[serde(default)]
    pub cost_effectiveness: Option<Value>,
}

/// 검증을 통과한 큐레이팅 제출물
#[derive(Debug, Clone)]
pub struct CurationSubmission {
    pub nickname: String,
    pub content: String,
    pub password: String,
    pub trendy: f64,
    pub personality: f64,
    pub practicality: f64,
    pub cost_effectiveness: f64,
}

impl RegisterCurationRequest {
    /// 큐레이팅 등록 요청을 검증합니다.
    ///
    /// 세 단계를 순서대로 수행하며, 첫 위반에서 즉시 중단합니다:
    ///
    /// 1. **필수 필드 존재 여부**: 일곱 필드 모두 누락/null/빈 문자열이
    ///    아니어야 합니다. 메시지는 한국어 필드 명칭을 사용합니다.
    /// 2. **점수 필드**: 네 점수를 명시적으로 숫자로 변환하고
    ///    `[0, 10]` 폐구간 범위를 확인합니다. `"0"`도 유효한 경계값입니다.
    /// 3. **문자열 필드**: 한줄 큐레이팅과 닉네임이 문자열 타입이며
    ///    공백 제거 후 비어 있지 않은지 확인합니다. 숫자 등 다른 타입이
    ///    들어온 경우를 거르는 타입 방어 단계입니다.
    pub fn validate(&self) -> AppResult<()> {
        // 1. 필수 필드 존재 여부 검사 (순서 고정)
        for (value, label) in self.required_fields() {
            require_present(value, label)?;
        }

        // 2. 점수 필드 검사 (숫자형, 0~10 범위)
        for (value, label) in self.score_fields() {
            if let Some(value) = value {
                require_number_in_range(value, MIN_SCORE, MAX_SCORE, label)?;
            }
        }

        // 3. 문자열 필드 검사
        if let Some(content) = &self.content {
            require_non_empty_string(content, "한줄 큐레이팅은 빈 문자열일 수 없습니다.")?;
        }
        if let Some(nickname) = &self.nickname {
            require_non_empty_string(nickname, "게시자 닉네임은 빈 문자열일 수 없습니다.")?;
        }

        Ok(())
    }

    /// 검증 후 타입 있는 제출물로 변환합니다.
    pub fn into_submission(self) -> AppResult<CurationSubmission> {
        self.validate()?;

        Ok(CurationSubmission {
            nickname: string_field(&self.nickname, "게시자 닉네임은 빈 문자열일 수 없습니다.")?,
            content: string_field(&self.content, "한줄 큐레이팅은 빈 문자열일 수 없습니다.")?,
            password: string_field(&self.password, "비밀번호을(를) 입력해 주세요.")?,
            trendy: score_field(&self.trendy, "트렌디 점수")?,
            personality: score_field(&self.personality, "개성 점수")?,
            practicality: score_field(&self.practicality, "실용성 점수")?,
            cost_effectiveness: score_field(&self.cost_effectiveness, "가성비 점수")?,
        })
    }

    /// 필수 필드와 한국어 명칭 (검사 순서 고정)
    fn required_fields(&self) -> [(Option<&Value>, &'static str); 7] {
        [
            (self.nickname.as_ref(), "닉네임"),
            (self.content.as_ref(), "한줄 큐레이팅"),
            (self.password.as_ref(), "비밀번호"),
            (self.trendy.as_ref(), "트렌디 점수"),
            (self.personality.as_ref(), "개성 점수"),
            (self.practicality.as_ref(), "실용성 점수"),
            (self.cost_effectiveness.as_ref(), "가성비 점수"),
        ]
    }

    /// 점수 필드와 한국어 명칭
    fn score_fields(&self) -> [(Option<&Value>, &'static str); 4] {
        [
            (self.trendy.as_ref(), "트렌디 점수"),
            (self.personality.as_ref(), "개성 점수"),
            (self.practicality.as_ref(), "실용성 점수"),
            (self.cost_effectiveness.as_ref(), "가성비 점수"),
        ]
    }
}

/// 문자열 필드를 추출합니다. 문자열이 아니거나 공백뿐이면 거부합니다.
fn string_field(value: &Option<Value>, message: &str) -> AppResult<String> {
    value
        .as_ref()
        .and_then(Value::as_str)
        .filter(|s| is_valid_string(s))
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::ValidationError(message.to_string()))
}

/// 점수 필드를 추출합니다. 누락은 필수 입력 메시지로, 변환 실패와
/// 범위 초과는 점수 범위 메시지로 거부합니다.
fn score_field(value: &Option<Value>, label: &str) -> AppResult<f64> {
    match value {
        Some(value) => require_number_in_range(value, MIN_SCORE, MAX_SCORE, label),
        None => Err(AppError::ValidationError(format!(
            "{}을(를) 입력해 주세요.",
            label
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "nickname": "스타일러",
            "content": "트렌디하면서 실용적인 조합이에요",
            "password": "curation1!",
            "trendy": 8,
            "personality": 7,
            "practicality": 9,
            "costEffectiveness": 6
        })
    }

    fn request_from(payload: Value) -> RegisterCurationRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_valid_request_accepted() {
        assert!(request_from(valid_payload()).validate().is_ok());
    }

    #[test]
    fn test_string_scores_coerced() {
        let mut payload = valid_payload();
        payload["trendy"] = json!("5");
        payload["costEffectiveness"] = json!("0");

        let submission = request_from(payload).into_submission().unwrap();
        assert_eq!(submission.trendy, 5.0);
        assert_eq!(submission.cost_effectiveness, 0.0);
    }

    #[test]
    fn test_boundary_scores_accepted() {
        let mut payload = valid_payload();
        payload["trendy"] = json!(0);
        payload["personality"] = json!(10);
        assert!(request_from(payload).validate().is_ok());
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let mut payload = valid_payload();
        payload["trendy"] = json!("abc");

        let err = request_from(payload).validate().unwrap_err();
        assert!(err.to_string().contains("트렌디 점수"));
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        let mut payload = valid_payload();
        payload["personality"] = json!(10.1);
        assert!(request_from(payload).validate().is_err());

        let mut payload = valid_payload();
        payload["personality"] = json!(-1);
        assert!(request_from(payload).validate().is_err());
    }

    #[test]
    fn test_missing_field_rejected_with_korean_label() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("practicality");

        let err = request_from(payload).validate().unwrap_err();
        assert!(err.to_string().contains("실용성 점수"));
    }

    #[test]
    fn test_empty_string_field_rejected_in_required_pass() {
        let mut payload = valid_payload();
        payload["nickname"] = json!("");

        let err = request_from(payload).validate().unwrap_err();
        assert!(err.to_string().contains("닉네임"));
    }

    #[test]
    fn test_required_pass_order_first_violation_wins() {
        // 닉네임과 점수가 모두 비어 있어도 메시지는 순서상 첫 필드 하나
        let err = request_from(json!({})).validate().unwrap_err();
        assert!(err.to_string().contains("닉네임"));
        assert!(!err.to_string().contains("점수"));
    }

    #[test]
    fn test_non_string_content_rejected_by_string_pass() {
        let mut payload = valid_payload();
        payload["content"] = json!(12345);

        let err = request_from(payload).validate().unwrap_err();
        assert!(err.to_string().contains("한줄 큐레이팅"));
    }

    #[test]
    fn test_whitespace_only_content_rejected() {
        let mut payload = valid_payload();
        payload["content"] = json!("   ");
        assert!(request_from(payload).validate().is_err());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let request = request_from(valid_payload());
        assert!(request.validate().is_ok());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_submission_preserves_fields() {
        let submission = request_from(valid_payload()).into_submission().unwrap();
        assert_eq!(submission.nickname, "스타일러");
        assert_eq!(submission.trendy, 8.0);
        assert_eq!(submission.practicality, 9.0);
    }
}
