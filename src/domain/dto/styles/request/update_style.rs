//! 스타일 수정 요청 DTO
//!
//! `PUT /api/styles/{style_id}` 요청 본문을 매핑하고 검증합니다.
//! `password`는 수정 대상이 아니라 소유 확인용 자격 증명이며,
//! 나머지 필드는 전달된 것만 부분 수정됩니다.

use serde::Deserialize;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::utils::validation::is_valid_string;

/// 스타일 수정 요청
///
/// 모든 수정 대상 필드는 선택 사항이지만, 수정 요청이 의미를 가지려면
/// 최소 하나는 전달되어야 합니다. 아무것도 수정하지 않는 요청은
/// no-op 성공이 아니라 검증 실패로 구분하여 거부합니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStyleRequest {
    /// 소유 확인용 비밀번호 (필수)
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Option<Value>,
}

impl UpdateStyleRequest {
    /// 수정 요청을 검증합니다.
    ///
    /// 검사 순서 (첫 위반에서 즉시 중단):
    ///
    /// 1. 비밀번호: 공백 제거 후 비어 있지 않은 문자열이어야 합니다.
    /// 2. 수정 항목: 비밀번호를 제외한 필드 중 최소 하나가 전달되어야
    ///    합니다.
    // TODO: tags/categories가 포함된 부분 수정에 대한 상세 구조 검증 추가
    pub fn validate(&self) -> AppResult<()> {
        if !self.password.as_deref().is_some_and(is_valid_string) {
            return Err(AppError::ValidationError(
                "비밀번호(password)는 필수 입력 항목입니다.".to_string(),
            ));
        }

        if self.update_field_count() == 0 {
            return Err(AppError::ValidationError(
                "수정할 내용을 최소 하나 이상 입력해야 합니다.".to_string(),
            ));
        }

        Ok(())
    }

    /// 비밀번호를 제외한, 값이 전달된 수정 대상 필드의 수
    pub fn update_field_count(&self) -> usize {
        [
            self.title.is_some(),
            self.nickname.is_some(),
            self.content.is_some(),
            self.image_urls.is_some(),
            self.tags.is_some(),
            self.categories.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_from(payload: serde_json::Value) -> UpdateStyleRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_password_and_one_field_accepted() {
        let request = request_from(json!({
            "password": "style1234",
            "title": "수정된 제목"
        }));
        assert!(request.validate().is_ok());
        assert_eq!(request.update_field_count(), 1);
    }

    #[test]
    fn test_password_only_rejected() {
        let request = request_from(json!({ "password": "style1234" }));

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("수정할 내용"));
    }

    #[test]
    fn test_missing_password_rejected() {
        let request = request_from(json!({ "title": "수정된 제목" }));

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("비밀번호"));
    }

    #[test]
    fn test_whitespace_only_password_rejected() {
        let request = request_from(json!({
            "password": "   ",
            "title": "수정된 제목"
        }));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_password_check_precedes_field_check() {
        // 둘 다 위반이어도 메시지는 첫 번째 규칙(비밀번호) 하나만
        let request = request_from(json!({}));

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("비밀번호"));
    }

    #[test]
    fn test_multiple_update_fields_counted() {
        let request = request_from(json!({
            "password": "pw",
            "tags": ["가을"],
            "categories": { "top": null },
            "content": "새 내용"
        }));
        assert_eq!(request.update_field_count(), 3);
        assert!(request.validate().is_ok());
    }
}
