//! 스타일 등록 요청 DTO
//!
//! `POST /api/styles` 요청 본문을 매핑하고 검증합니다.
//! 필수 필드는 의도적으로 `Option`으로 선언되어 있습니다. 누락된 필드가
//! serde의 missing field 에러가 아니라 이 도메인의 검증 메시지로
//! 거부되어야 하기 때문입니다.

use serde::Deserialize;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::catalog::{self, StyleComposition};
use crate::utils::validation::is_valid_string;

/// 하나의 스타일에 등록할 수 있는 최대 태그 수 (API 계약)
pub const MAX_TAG_COUNT: usize = 3;

/// 스타일 등록 요청
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStyleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    /// 선택 필드. 없으면 태그 없이 등록됩니다
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// 슬롯 → 아이템 구성. 구조 검증 전이므로 원시 JSON 값으로 받습니다.
    #[serde(default)]
    pub categories: Option<Value>,
}

/// 검증을 통과한 등록 요청의 타입 있는 형태
///
/// 서비스 계층은 이 구조체만 다루므로 `Option` 처리나 원시 JSON 값이
/// 게이트 바깥으로 새어 나가지 않습니다.
#[derive(Debug, Clone)]
pub struct StyleSubmission {
    pub title: String,
    pub nickname: String,
    pub content: String,
    pub password: String,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    pub composition: StyleComposition,
}

impl RegisterStyleRequest {
    /// 등록 요청을 검증합니다.
    ///
    /// 검사 순서 (첫 위반에서 즉시 중단, 메시지는 항상 하나):
    ///
    /// 1. 필수 항목: 제목/닉네임/내용/비밀번호는 공백 제거 후 비어 있지
    ///    않아야 하고, 사진은 최소 1장, 스타일 구성은 존재해야 합니다.
    /// 2. 태그 개수: 최대 [`MAX_TAG_COUNT`]개. 태그 자체는 선택 사항입니다.
    /// 3. 스타일 구성 구조: [`catalog::validate_composition`]에 위임합니다.
    ///
    /// 순수 함수이며, 같은 요청을 다시 검증해도 결과가 달라지지 않습니다.
    pub fn validate(&self) -> AppResult<()> {
        let required_present = self.title.as_deref().is_some_and(is_valid_string)
            && self.nickname.as_deref().is_some_and(is_valid_string)
            && self.content.as_deref().is_some_and(is_valid_string)
            && self.password.as_deref().is_some_and(is_valid_string)
            && self.image_urls.as_ref().is_some_and(|urls| !urls.is_empty())
            && self.categories.is_some();

        if !required_present {
            return Err(AppError::ValidationError(
                "제목, 닉네임, 내용, 비밀번호, 사진(최소1장), 스타일 구성은 필수 입력 항목입니다."
                    .to_string(),
            ));
        }

        if let Some(tags) = &self.tags {
            if tags.len() > MAX_TAG_COUNT {
                return Err(AppError::ValidationError(
                    "태그는 최대 3개까지만 등록할 수 있습니다.".to_string(),
                ));
            }
        }

        if let Some(categories) = &self.categories {
            catalog::validate_composition(categories)?;
        }

        Ok(())
    }

    /// 검증 후 타입 있는 제출물로 변환합니다.
    ///
    /// 검증에 실패하면 해당 `ValidationError`를 그대로 반환합니다.
    pub fn into_submission(self) -> AppResult<StyleSubmission> {
        self.validate()?;

        let composition = match &self.categories {
            Some(categories) => catalog::parse_composition(categories)?,
            // validate()가 categories 누락을 이미 거부함
            None => StyleComposition::new(),
        };

        Ok(StyleSubmission {
            title: self.title.unwrap_or_default(),
            nickname: self.nickname.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            image_urls: self.image_urls.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            composition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "가을 데일리룩",
            "nickname": "민지",
            "content": "출근할 때 입기 좋은 코디",
            "password": "style1234",
            "imageUrls": ["https://img.example.com/1.jpg"],
            "tags": ["가을", "데일리"],
            "categories": {
                "top": { "name": "울 니트", "brand": "유니클로", "price": 39900 }
            }
        })
    }

    fn request_from(payload: Value) -> RegisterStyleRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_valid_request_accepted() {
        let request = request_from(valid_payload());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_minimal_request_accepted() {
        // 태그 없이도 등록 가능 (선택 필드)
        let request = request_from(json!({
            "title": "A",
            "nickname": "n",
            "content": "c",
            "password": "p",
            "imageUrls": ["u1"],
            "categories": {
                "top": { "name": "T", "brand": "B", "price": 1000 }
            }
        }));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("title");
        let request = request_from(payload);

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("필수 입력 항목"));
    }

    #[test]
    fn test_whitespace_only_password_rejected() {
        let mut payload = valid_payload();
        payload["password"] = json!("   ");
        assert!(request_from(payload).validate().is_err());
    }

    #[test]
    fn test_empty_image_urls_rejected() {
        let mut payload = valid_payload();
        payload["imageUrls"] = json!([]);
        assert!(request_from(payload).validate().is_err());
    }

    #[test]
    fn test_missing_categories_rejected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("categories");
        assert!(request_from(payload).validate().is_err());
    }

    #[test]
    fn test_four_tags_rejected() {
        let mut payload = valid_payload();
        payload["tags"] = json!(["a", "b", "c", "d"]);

        let err = request_from(payload).validate().unwrap_err();
        assert!(err.to_string().contains("태그는 최대 3개"));
    }

    #[test]
    fn test_three_tags_accepted() {
        let mut payload = valid_payload();
        payload["tags"] = json!(["a", "b", "c"]);
        assert!(request_from(payload).validate().is_ok());
    }

    #[test]
    fn test_unknown_slot_rejected_regardless_of_other_fields() {
        let mut payload = valid_payload();
        payload["categories"] = json!({
            "hat": { "name": "H", "brand": "B", "price": 1 }
        });

        let err = request_from(payload).validate().unwrap_err();
        assert!(err.to_string().contains("hat"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let request = request_from(valid_payload());
        assert!(request.validate().is_ok());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_submission_builds_typed_composition() {
        use crate::domain::models::catalog::CategorySlot;

        let submission = request_from(valid_payload()).into_submission().unwrap();
        assert_eq!(submission.title, "가을 데일리룩");
        assert_eq!(submission.tags.len(), 2);
        assert!(submission.composition.contains_key(&CategorySlot::Top));
    }

    #[test]
    fn test_into_submission_rejects_invalid_request() {
        let mut payload = valid_payload();
        payload["categories"] = json!({});
        assert!(request_from(payload).into_submission().is_err());
    }
}
