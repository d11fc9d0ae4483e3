//! # Application Error Handling System
//!
//! 스타일 보드 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 HTTP 응답으로 자동 변환됩니다.
//!
//! ## 설계 원칙
//!
//! - **검증 에러는 단일 종류**: 요청 검증 실패는 전부 `ValidationError` 하나로
//!   표현하며, 메시지 내용으로만 구분됩니다. 검증기는 첫 번째 위반에서 즉시
//!   반환하므로 클라이언트는 요청당 정확히 하나의 구체적인 메시지를 받습니다.
//! - **계층별 분류**: 저장소 오류(`DatabaseError`, `RedisError`)와 비즈니스
//!   규칙 위반(`NotFound`, `AuthorizationError`)은 검증 에러와 별도의 분류로
//!   유지됩니다.
//! - **컨텍스트 보존**: `ErrorContext` trait으로 외부 라이브러리 에러에
//!   설명을 붙여 변환합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! impl StyleService {
//!     async fn get_style(&self, id: &str) -> Result<StyleResponse, AppError> {
//!         let style = self.style_repo.find_by_id(id).await?
//!             .ok_or_else(|| AppError::NotFound("스타일을 찾을 수 없습니다".to_string()))?;
//!         Ok(StyleResponse::from(style))
//!     }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 검증 실패 |
//! | `NotFound` | 404 Not Found | 스타일/큐레이팅 없음 |
//! | `AuthorizationError` | 403 Forbidden | 비밀번호 불일치 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 중 발생하는 오류 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 연산 중 발생하는 오류 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 요청 검증 실패 (400 Bad Request)
    ///
    /// 검증 게이트에서 발생하는 유일한 에러 종류입니다. 필드별 구체적인
    /// 메시지를 담으며, 검증기는 첫 위반에서 중단하므로 메시지는 항상
    /// 하나입니다.
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락 또는 빈 문자열
    /// - 허용되지 않은 스타일 구성 타입(슬롯)
    /// - 점수 범위([0, 10]) 초과 또는 숫자 변환 실패
    /// - 태그 개수 제한(3개) 초과
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청된 리소스가 존재하지 않음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 권한 부족 (403 Forbidden)
    ///
    /// 스타일/큐레이팅 수정·삭제 시 비밀번호가 일치하지 않을 때 발생합니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 예상하지 못한 시스템 오류 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와
    /// `{"error": "<message>"}` 형태의 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::{AppError, ErrorContext};
///
/// let styles = collection.find(filter).await
///     .context("스타일 목록 조회 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("비밀번호(password)는 필수 입력 항목입니다.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("스타일을 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("비밀번호가 일치하지 않습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
