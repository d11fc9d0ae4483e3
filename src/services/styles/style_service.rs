//! # 스타일 관리 서비스 구현
//!
//! 스타일 게시물의 전체 생명주기를 관리하는 핵심 비즈니스 로직입니다.
//! 등록, 목록/상세 조회, 수정, 삭제를 담당하며, 검증 게이트를 통과한
//! 요청만 이 계층에 도달합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  StyleService                    │
//! ├──────────────────────────────────────────────────┤
//! │ • 등록: 제출물 변환 → 비밀번호 해싱 → 저장        │
//! │ • 조회: 페이지 목록 / 상세 (캐시 활용)            │
//! │ • 수정: 소유 확인 → 부분 업데이트($set)           │
//! │ • 삭제: 소유 확인 → 삭제 → 큐레이팅 연쇄 정리     │
//! └──────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────────┐
//! │      StyleRepository / CurationRepository        │
//! │ • MongoDB CRUD + Redis 캐싱                      │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계
//!
//! - 게시물 비밀번호는 bcrypt 해시로만 저장 (환경별 cost)
//! - 수정/삭제는 비밀번호 일치 확인 후에만 수행, 불일치는 403
//! - 응답 DTO 변환 시 해시는 항상 제외

use std::sync::Arc;

use bcrypt::hash;
use mongodb::bson::{DateTime, Document};
use singleton_macro::service;

use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::{
        dto::common::{MessageResponse, PageQuery},
        dto::styles::{
            request::{DeleteStyleRequest, RegisterStyleRequest, UpdateStyleRequest},
            response::{StyleListResponse, StyleResponse},
        },
        entities::styles::Style,
        models::catalog,
    },
    repositories::{curations::CurationRepository, styles::StyleRepository},
};

/// 스타일 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며, 리포지토리가 자동으로
/// 주입됩니다:
///
/// ```rust,ignore
/// let style_service = StyleService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "style")]
pub struct StyleService {
    style_repo: Arc<StyleRepository>,
    curation_repo: Arc<CurationRepository>,
}

impl StyleService {
    /// 새 스타일을 등록합니다.
    ///
    /// 검증된 제출물로 변환한 뒤 비밀번호를 해싱하고 엔티티를 저장합니다.
    /// 검증 실패 시 `ValidationError`가 그대로 전파됩니다.
    pub async fn register_style(
        &self,
        request: RegisterStyleRequest,
    ) -> Result<StyleResponse, AppError> {
        let start_time = std::time::Instant::now();

        let submission = request.into_submission()?;

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&submission.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let style = Style::new(
            submission.title,
            submission.nickname,
            submission.content,
            password_hash,
            submission.image_urls,
            submission.tags,
            submission.composition,
        );

        // 저장
        let created_style = self.style_repo.create(style).await?;

        log::info!("Total style registration took: {:?}", start_time.elapsed());

        Ok(StyleResponse::from(created_style))
    }

    /// 스타일 목록을 최신순으로 조회합니다.
    pub async fn get_styles(&self, query: PageQuery) -> Result<StyleListResponse, AppError> {
        let styles = self.style_repo.find_page(query.skip(), query.limit()).await?;
        let total = self.style_repo.count().await?;

        Ok(StyleListResponse {
            data: styles.into_iter().map(StyleResponse::from).collect(),
            total,
            page: query.page,
            page_size: query.page_size,
        })
    }

    /// ID로 스타일 상세를 조회합니다.
    pub async fn get_style(&self, id: &str) -> Result<StyleResponse, AppError> {
        let style = self.style_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("스타일을 찾을 수 없습니다".to_string()))?;

        Ok(StyleResponse::from(style))
    }

    /// 스타일을 부분 수정합니다.
    ///
    /// 비밀번호 일치를 확인한 뒤, 전달된 필드만 `$set`으로 갱신합니다.
    /// 전달된 `categories`는 저장 전에 구성 검증을 통과해야 합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 ID의 스타일이 없는 경우
    /// * `AuthorizationError` - 비밀번호 불일치
    /// * `ValidationError` - 전달된 구성이 유효하지 않은 경우
    pub async fn update_style(
        &self,
        id: &str,
        request: UpdateStyleRequest,
    ) -> Result<StyleResponse, AppError> {
        let style = self.style_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("스타일을 찾을 수 없습니다".to_string()))?;

        let password = request.password.clone().unwrap_or_default();
        self.verify_password(&password, &style.password_hash)?;

        let update_doc = Self::build_update_doc(&request)?;

        let updated_style = self.style_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("스타일을 찾을 수 없습니다".to_string()))?;

        Ok(StyleResponse::from(updated_style))
    }

    /// 스타일을 삭제합니다.
    ///
    /// 비밀번호 일치를 확인한 뒤 스타일을 삭제하고, 연결된 큐레이팅을
    /// 연쇄 삭제합니다.
    pub async fn delete_style(
        &self,
        id: &str,
        request: DeleteStyleRequest,
    ) -> Result<MessageResponse, AppError> {
        let style = self.style_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("스타일을 찾을 수 없습니다".to_string()))?;

        let password = request.password.clone().unwrap_or_default();
        self.verify_password(&password, &style.password_hash)?;

        let deleted = self.style_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("스타일을 찾을 수 없습니다".to_string()));
        }

        // 연결된 큐레이팅 연쇄 정리
        if let Some(style_oid) = style.id {
            let removed = self.curation_repo.delete_by_style(&style_oid).await?;
            log::info!("스타일 {} 삭제: 큐레이팅 {}개 연쇄 삭제됨", id, removed);
        }

        Ok(MessageResponse::new("스타일이 삭제되었습니다"))
    }

    /// 요청 비밀번호를 저장된 해시와 비교합니다.
    ///
    /// 불일치는 403으로 매핑되는 `AuthorizationError`로 반환됩니다.
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<(), AppError> {
        let matches = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !matches {
            return Err(AppError::AuthorizationError(
                "비밀번호가 일치하지 않습니다".to_string(),
            ));
        }
        Ok(())
    }

    /// 수정 요청에서 `$set` 업데이트 문서를 구성합니다.
    ///
    /// 전달된 필드만 포함하며, `updated_at`은 항상 현재 시각으로
    /// 갱신됩니다.
    fn build_update_doc(request: &UpdateStyleRequest) -> Result<Document, AppError> {
        let mut update_doc = Document::new();

        if let Some(title) = &request.title {
            update_doc.insert("title", title);
        }
        if let Some(nickname) = &request.nickname {
            update_doc.insert("nickname", nickname);
        }
        if let Some(content) = &request.content {
            update_doc.insert("content", content);
        }
        if let Some(image_urls) = &request.image_urls {
            update_doc.insert("image_urls", image_urls.clone());
        }
        if let Some(tags) = &request.tags {
            update_doc.insert("tags", tags.clone());
        }
        if let Some(categories) = &request.categories {
            // 구성이 통째로 교체되므로 등록과 동일한 구조 검증을 거침
            let composition = catalog::parse_composition(categories)?;
            let bson = mongodb::bson::to_bson(&composition)
                .map_err(|e| AppError::InternalError(format!("스타일 구성 직렬화 실패: {}", e)))?;
            update_doc.insert("categories", bson);
        }

        update_doc.insert("updated_at", DateTime::now());

        Ok(update_doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update_request(payload: serde_json::Value) -> UpdateStyleRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_build_update_doc_contains_only_present_fields() {
        let request = update_request(json!({
            "password": "pw",
            "title": "새 제목",
            "tags": ["가을"]
        }));

        let doc = StyleService::build_update_doc(&request).unwrap();

        assert_eq!(doc.get_str("title").unwrap(), "새 제목");
        assert!(doc.get("tags").is_some());
        assert!(doc.get("nickname").is_none());
        assert!(doc.get("content").is_none());
        // 비밀번호는 수정 대상이 아님
        assert!(doc.get("password").is_none());
        assert!(doc.get("password_hash").is_none());
        // 수정 시각은 항상 갱신
        assert!(doc.get("updated_at").is_some());
    }

    #[test]
    fn test_build_update_doc_validates_replacement_composition() {
        let request = update_request(json!({
            "password": "pw",
            "categories": { "hat": { "name": "볼캡", "brand": "MLB", "price": 1 } }
        }));

        let err = StyleService::build_update_doc(&request).unwrap_err();
        assert!(err.to_string().contains("hat"));
    }

    #[test]
    fn test_build_update_doc_serializes_valid_composition() {
        let request = update_request(json!({
            "password": "pw",
            "categories": {
                "top": { "name": "니트", "brand": "브랜드", "price": 39900 }
            }
        }));

        let doc = StyleService::build_update_doc(&request).unwrap();
        let categories = doc.get_document("categories").unwrap();
        assert!(categories.get("top").is_some());
    }
}
