//! # 큐레이팅 리포지토리 구현
//!
//! 큐레이팅 엔티티의 데이터 액세스 계층입니다.
//! 큐레이팅은 항상 소속 스타일 기준으로 조회되므로 개별 캐싱은 하지 않고,
//! `style_id` 복합 인덱스로 조회 성능을 확보합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::curations::Curation,
};

/// 큐레이팅 데이터 액세스 리포지토리
#[repository(name = "curation", collection = "curations")]
pub struct CurationRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl CurationRepository {
    /// 특정 스타일의 큐레이팅 목록 조회 (최신순)
    ///
    /// # 인자
    ///
    /// * `style_id` - 소속 스타일의 ObjectId
    /// * `skip` - 건너뛸 문서 수
    /// * `limit` - 조회할 최대 문서 수
    pub async fn find_by_style(
        &self,
        style_id: &ObjectId,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Curation>, AppError> {
        let cursor = self.collection::<Curation>()
            .find(doc! { "style_id": *style_id })
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 특정 스타일의 큐레이팅 수 조회
    pub async fn count_by_style(&self, style_id: &ObjectId) -> Result<u64, AppError> {
        self.collection::<Curation>()
            .count_documents(doc! { "style_id": *style_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 큐레이팅 저장
    pub async fn create(&self, mut curation: Curation) -> Result<Curation, AppError> {
        let result = self.collection::<Curation>()
            .insert_one(&curation)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        curation.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(curation)
    }

    /// 특정 스타일에 속한 큐레이팅 전체 삭제
    ///
    /// 스타일 삭제 시 연쇄 정리에 사용됩니다. 삭제된 문서 수를 반환합니다.
    pub async fn delete_by_style(&self, style_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<Curation>()
            .delete_many(doc! { "style_id": *style_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_collection_cache(None).await;

        Ok(result.deleted_count)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **스타일별 최신순 복합 인덱스**: `style_id` + `created_at`(내림차순)
    ///    스타일 상세 화면의 큐레이팅 목록 조회를 최적화합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Curation>();

        let style_created_index = IndexModel::builder()
            .keys(doc! { "style_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("style_id_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([style_created_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
