//! 큐레이팅 관리 서비스 구현
//!
//! 스타일에 달리는 큐레이팅의 등록과 목록 조회를 담당합니다.
//! 큐레이팅은 반드시 존재하는 스타일에만 달 수 있으며, 등록 시
//! 스타일의 비정규화 카운터(`curation_count`)를 함께 갱신합니다.

use std::sync::Arc;

use bcrypt::hash;
use singleton_macro::service;

use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::{
        dto::common::PageQuery,
        dto::curations::{
            request::RegisterCurationRequest,
            response::{CurationListResponse, CurationResponse},
        },
        entities::curations::Curation,
    },
    repositories::{curations::CurationRepository, styles::StyleRepository},
};

/// 큐레이팅 비즈니스 로직 서비스
#[service(name = "curation")]
pub struct CurationService {
    curation_repo: Arc<CurationRepository>,
    style_repo: Arc<StyleRepository>,
}

impl CurationService {
    /// 스타일에 새 큐레이팅을 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청 본문이 검증을 통과하지 못한 경우
    /// * `NotFound` - 대상 스타일이 존재하지 않는 경우
    pub async fn register_curation(
        &self,
        style_id: &str,
        request: RegisterCurationRequest,
    ) -> Result<CurationResponse, AppError> {
        let submission = request.into_submission()?;

        // 대상 스타일 존재 확인
        let style = self.style_repo
            .find_by_id(style_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("큐레이팅을 등록할 스타일을 찾을 수 없습니다".to_string())
            })?;

        let style_oid = style.id.ok_or_else(|| {
            AppError::InternalError("저장된 스타일에 ID가 없습니다".to_string())
        })?;

        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        let password_hash = hash(&submission.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let curation = Curation::new(
            style_oid,
            submission.nickname,
            submission.content,
            password_hash,
            submission.trendy,
            submission.personality,
            submission.practicality,
            submission.cost_effectiveness,
        );

        let created_curation = self.curation_repo.create(curation).await?;

        // 스타일의 큐레이팅 카운터 갱신
        self.style_repo.adjust_curation_count(&style_oid, 1).await?;

        Ok(CurationResponse::from(created_curation))
    }

    /// 스타일의 큐레이팅 목록을 최신순으로 조회합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 대상 스타일이 존재하지 않는 경우
    pub async fn get_curations(
        &self,
        style_id: &str,
        query: PageQuery,
    ) -> Result<CurationListResponse, AppError> {
        let style = self.style_repo
            .find_by_id(style_id)
            .await?
            .ok_or_else(|| AppError::NotFound("스타일을 찾을 수 없습니다".to_string()))?;

        let style_oid = style.id.ok_or_else(|| {
            AppError::InternalError("저장된 스타일에 ID가 없습니다".to_string())
        })?;

        let curations = self.curation_repo
            .find_by_style(&style_oid, query.skip(), query.limit())
            .await?;
        let total = self.curation_repo.count_by_style(&style_oid).await?;

        Ok(CurationListResponse {
            data: curations.into_iter().map(CurationResponse::from).collect(),
            total,
            page: query.page,
            page_size: query.page_size,
        })
    }
}
