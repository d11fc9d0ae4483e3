//! # 스타일 관련 요청 DTO 모듈
//!
//! 스타일 게시물과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계약
//!
//! 각 요청 DTO의 `validate()`는 규칙을 정해진 순서로 검사하다가
//! **첫 번째 위반에서 즉시 중단**하고 필드를 명시한 메시지 하나를 담은
//! `AppError::ValidationError`를 반환합니다. 여러 위반을 누적한 보고서를
//! 만들지 않으므로 클라이언트가 받는 에러 메시지는 항상 명확하게
//! 하나입니다.
//!
//! 검증은 순수 함수입니다. I/O가 없고 상태를 보관하지 않으므로,
//! 통과한 요청을 다시 검증해도 같은 결과가 나옵니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[actix_web::post("")]
//! async fn register_style(
//!     payload: web::Json<RegisterStyleRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?; // 검증 게이트. 실패 시 저장 계층에 도달하지 않음
//!     let service = StyleService::instance();
//!     let response = service.register_style(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```

pub mod register_style;
pub mod update_style;
pub mod delete_style;

pub use register_style::{RegisterStyleRequest, StyleSubmission, MAX_TAG_COUNT};
pub use update_style::UpdateStyleRequest;
pub use delete_style::DeleteStyleRequest;
