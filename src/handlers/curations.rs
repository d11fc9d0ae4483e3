//! # Curation HTTP Handlers
//!
//! 스타일에 달리는 큐레이팅 관련 HTTP 엔드포인트 핸들러입니다.
//! 스타일 핸들러와 동일하게 서비스 호출 전에 검증 게이트를 거칩니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::PageQuery;
use crate::domain::dto::curations::request::RegisterCurationRequest;
use crate::services::curations::CurationService;
use crate::utils::validation::first_validation_message;

/// 큐레이팅 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /api/styles/{style_id}/curations`
///
/// # 요청 본문
///
/// ```json
/// {
///   "nickname": "스타일러",
///   "content": "트렌디하면서 실용적인 조합이에요",
///   "password": "curation1!",
///   "trendy": 8,
///   "personality": 7,
///   "practicality": 9,
///   "costEffectiveness": 6
/// }
/// ```
///
/// # 검증 규칙
///
/// - 일곱 필드 모두 필수
/// - 네 점수는 0~10 범위의 숫자 (숫자 문자열 `"5"`도 허용)
/// - 한줄 큐레이팅과 닉네임은 공백이 아닌 문자열
#[post("/{style_id}/curations")]
pub async fn register_curation(
    style_id: web::Path<String>,
    payload: web::Json<RegisterCurationRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let service = CurationService::instance();
    let response = service
        .register_curation(&style_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 큐레이팅 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/styles/{style_id}/curations?page=1&pageSize=10`
#[get("/{style_id}/curations")]
pub async fn list_curations(
    style_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query
        .validate()
        .map_err(|e| AppError::ValidationError(first_validation_message(&e)))?;

    let service = CurationService::instance();
    let response = service.get_curations(&style_id, query).await?;

    Ok(HttpResponse::Ok().json(response))
}
