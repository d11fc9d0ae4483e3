//! 스타일 삭제 요청 DTO
//!
//! `DELETE /api/styles/{style_id}` 요청 본문을 매핑하고 검증합니다.
//! 삭제 요청은 소유 확인용 비밀번호만 받습니다.

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::utils::validation::is_valid_string;

/// 스타일 삭제 요청
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteStyleRequest {
    /// 소유 확인용 비밀번호 (필수)
    #[serde(default)]
    pub password: Option<String>,
}

impl DeleteStyleRequest {
    /// 삭제 요청을 검증합니다.
    ///
    /// 비밀번호가 없거나 공백뿐이면 거부합니다.
    pub fn validate(&self) -> AppResult<()> {
        if !self.password.as_deref().is_some_and(is_valid_string) {
            return Err(AppError::ValidationError(
                "비밀번호(password)는 필수 입력 항목입니다.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_password_accepted() {
        let request: DeleteStyleRequest =
            serde_json::from_value(json!({ "password": "style1234" })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_password_rejected() {
        let request: DeleteStyleRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_password_rejected() {
        let request: DeleteStyleRequest =
            serde_json::from_value(json!({ "password": "  \t " })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_password_rejected() {
        let request: DeleteStyleRequest =
            serde_json::from_value(json!({ "password": null })).unwrap();
        assert!(request.validate().is_err());
    }
}
