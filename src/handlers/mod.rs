//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 하며, Controller 레이어 역할을 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증 게이트 + 엔드포인트    ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 검증 게이트 규약
//!
//! 핸들러는 요청 DTO의 `validate()`를 서비스 호출보다 먼저 실행합니다.
//! 검증은 동기적이고 I/O가 없으며, 실패하면 `AppError::ValidationError`가
//! `?`로 전파되어 400 응답으로 변환됩니다. 성공하면 페이로드는 변경 없이
//! 서비스 계층으로 전달됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn register_style(
//!     payload: web::Json<RegisterStyleRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?; // 검증 게이트
//!     let service = StyleService::instance(); // 싱글톤 패턴
//!     let response = service.register_style(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`styles`**: 스타일 게시물 엔드포인트
//!   - 목록 조회 (`GET /api/styles`)
//!   - 상세 조회 (`GET /api/styles/{id}`)
//!   - 등록 (`POST /api/styles`)
//!   - 수정 (`PUT /api/styles/{id}`)
//!   - 삭제 (`DELETE /api/styles/{id}`)
//!
//! - **`curations`**: 큐레이팅 엔드포인트
//!   - 등록 (`POST /api/styles/{id}/curations`)
//!   - 목록 조회 (`GET /api/styles/{id}/curations`)

pub mod styles;
pub mod curations;
