//! # Style HTTP Handlers
//!
//! 스타일 게시물 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! 모든 쓰기 핸들러는 서비스 호출 전에 요청 DTO의 `validate()`를 먼저
//! 실행합니다. 이 지점이 검증 게이트입니다. 검증에 실패한 요청은
//! `ValidationError`(400)로 즉시 거부되며, 저장 계층에 도달하지 않습니다.
//! 통과한 요청은 페이로드 그대로 서비스에 전달됩니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/styles` | 스타일 목록 조회 | 200 OK |
//! | `GET` | `/api/styles/{id}` | 스타일 상세 조회 | 200 OK |
//! | `POST` | `/api/styles` | 스타일 등록 | 201 Created |
//! | `PUT` | `/api/styles/{id}` | 스타일 수정 | 200 OK |
//! | `DELETE` | `/api/styles/{id}` | 스타일 삭제 | 200 OK |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::PageQuery;
use crate::domain::dto::styles::request::{
    DeleteStyleRequest, RegisterStyleRequest, UpdateStyleRequest,
};
use crate::services::styles::StyleService;
use crate::utils::validation::first_validation_message;

/// 스타일 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/styles?page=1&pageSize=10`
///
/// 최신 등록순으로 정렬된 페이지를 반환하며, 각 항목에는 연결된
/// 큐레이팅 개수(`curationCount`)가 포함됩니다.
#[get("")]
pub async fn list_styles(query: web::Query<PageQuery>) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query
        .validate()
        .map_err(|e| AppError::ValidationError(first_validation_message(&e)))?;

    let service = StyleService::instance();
    let response = service.get_styles(query).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 스타일 상세 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/styles/{style_id}`
///
/// ## 실패 사례
///
/// - 잘못된 ID 형식 (400 Bad Request)
/// - 존재하지 않는 스타일 (404 Not Found)
#[get("/{style_id}")]
pub async fn find_style(style_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = StyleService::instance();
    let style = service.get_style(&style_id).await?;

    Ok(HttpResponse::Ok().json(style))
}

/// 스타일 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /api/styles`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "가을 데일리룩",
///   "nickname": "민지",
///   "content": "출근할 때 입기 좋은 코디",
///   "password": "style1234",
///   "imageUrls": ["https://img.example.com/1.jpg"],
///   "tags": ["가을", "데일리"],
///   "categories": {
///     "top": { "name": "울 니트", "brand": "유니클로", "price": 39900 }
///   }
/// }
/// ```
///
/// # 검증 규칙
///
/// - 제목/닉네임/내용/비밀번호/사진(최소 1장)/스타일 구성 필수
/// - 태그는 최대 3개
/// - 스타일 구성은 허용된 슬롯(top, bottom, outer, dress, shoes, bag,
///   accessory)만 사용 가능하며, 유효한 아이템이 최소 하나 필요
///
/// 검증 실패 시 위반된 첫 규칙의 메시지 하나가 400 응답으로 반환됩니다.
#[post("")]
pub async fn register_style(
    payload: web::Json<RegisterStyleRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let service = StyleService::instance();
    let response = service.register_style(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 스타일 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /api/styles/{style_id}`
///
/// 비밀번호로 소유를 확인한 뒤 전달된 필드만 부분 수정합니다.
///
/// ## 실패 사례
///
/// - 비밀번호 누락 또는 수정 항목 없음 (400 Bad Request)
/// - 비밀번호 불일치 (403 Forbidden)
/// - 존재하지 않는 스타일 (404 Not Found)
#[put("/{style_id}")]
pub async fn update_style(
    style_id: web::Path<String>,
    payload: web::Json<UpdateStyleRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = StyleService::instance();
    let response = service.update_style(&style_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 스타일 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/styles/{style_id}`
///
/// 비밀번호로 소유를 확인한 뒤 스타일과 연결된 큐레이팅을 함께
/// 삭제합니다.
#[delete("/{style_id}")]
pub async fn delete_style(
    style_id: web::Path<String>,
    payload: web::Json<DeleteStyleRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = StyleService::instance();
    let response = service.delete_style(&style_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
