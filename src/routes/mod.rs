//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 스타일/큐레이팅 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 스타일 CRUD API 엔드포인트
//! - 스타일 하위 큐레이팅 API 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_style_routes(cfg);
}

/// 스타일 관련 라우트를 설정합니다
///
/// 스타일 CRUD와 하위 큐레이팅 엔드포인트를 등록합니다.
/// 큐레이팅은 항상 특정 스타일에 종속되므로 같은 스코프 아래
/// `/{style_id}/curations` 경로로 중첩됩니다.
///
/// # Available Routes
///
/// ## 스타일
/// - `GET    /api/styles` - 스타일 목록 조회 (큐레이팅 개수 포함)
/// - `GET    /api/styles/{id}` - 스타일 상세 조회
/// - `POST   /api/styles` - 스타일 등록
/// - `PUT    /api/styles/{id}` - 스타일 수정 (비밀번호 확인)
/// - `DELETE /api/styles/{id}` - 스타일 삭제 (비밀번호 확인)
///
/// ## 큐레이팅
/// - `POST /api/styles/{id}/curations` - 큐레이팅 등록
/// - `GET  /api/styles/{id}/curations` - 큐레이팅 목록 조회
///
/// # Examples
///
/// ```bash
/// # 스타일 등록
/// curl -X POST http://localhost:8080/api/styles \
///   -H "Content-Type: application/json" \
///   -d '{"title":"가을 데일리룩","nickname":"민지","content":"...",
///        "password":"style1234","imageUrls":["https://img.example.com/1.jpg"],
///        "categories":{"top":{"name":"울 니트","brand":"유니클로","price":39900}}}'
///
/// # 큐레이팅 등록
/// curl -X POST http://localhost:8080/api/styles/{id}/curations \
///   -H "Content-Type: application/json" \
///   -d '{"nickname":"스타일러","content":"실용적이에요","password":"pw",
///        "trendy":8,"personality":7,"practicality":9,"costEffectiveness":6}'
/// ```
fn configure_style_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/styles")
            // 스타일 CRUD
            .service(handlers::styles::list_styles)
            .service(handlers::styles::register_style)
            // 큐레이팅 (스타일 하위 경로, 상세 조회보다 먼저 등록)
            .service(handlers::curations::register_curation)
            .service(handlers::curations::list_curations)
            // 스타일 단건
            .service(handlers::styles::find_style)
            .service(handlers::styles::update_style)
            .service(handlers::styles::delete_style)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "style_board",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "style_board",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
