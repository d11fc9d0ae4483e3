//! # 스타일 리포지토리 구현
//!
//! 스타일 게시물 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 읽기 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **읽기 우선 캐싱**: 상세 조회는 캐시를 먼저 확인
//! - **쓰기 후 캐시 무효화**: 수정/삭제 시 관련 캐시 자동 제거

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::styles::Style,
};

/// 스타일 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **캐시 키**: `style:{style_id}`, TTL 600초
/// - **캐시 대상**: 상세 조회(`find_by_id`)만. 목록 조회는 정렬/페이징
///   조합이 많아 캐싱하지 않습니다.
/// - **무효화**: 수정, 삭제, 큐레이팅 카운터 갱신 시
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>`를 반환합니다. 잘못된 ObjectId
/// 형식은 `ValidationError`, MongoDB 오류는 `DatabaseError`로 변환됩니다.
#[repository(name = "style", collection = "styles")]
pub struct StyleRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl StyleRepository {
    /// ID로 스타일 조회
    ///
    /// 캐시를 먼저 확인하고, 미스인 경우 MongoDB에서 조회한 뒤
    /// 10분 TTL로 캐시에 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Style))` - 스타일을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 스타일이 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Style>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Style>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let style = self.collection::<Style>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref style) = style {
            let _ = self.redis
                .set_with_expiry(&cache_key, style, 600)
                .await;
        }

        Ok(style)
    }

    /// 최신순으로 정렬된 스타일 페이지 조회
    ///
    /// # 인자
    ///
    /// * `skip` - 건너뛸 문서 수
    /// * `limit` - 조회할 최대 문서 수
    pub async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<Style>, AppError> {
        let cursor = self.collection::<Style>()
            .find(doc! {})
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

    /// 전체 스타일 수 조회 (목록 페이징 메타데이터용)
    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<Style>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 스타일 저장
    ///
    /// ID는 MongoDB가 할당하며, 저장된 ID가 반영된 엔티티를 반환합니다.
    pub async fn create(&self, mut style: Style) -> Result<Style, AppError> {
        let result = self.collection::<Style>()
            .insert_one(&style)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        style.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(style)
    }

    /// 스타일 부분 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고, 변경 후의 최신 문서를
    /// 반환합니다. 성공 시 해당 스타일의 캐시를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Style))` - 업데이트된 스타일
    /// * `Ok(None)` - 해당 ID의 스타일이 존재하지 않음
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Style>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_style = self.collection::<Style>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated_style.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated_style)
    }

    /// 스타일 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 스타일이 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Style>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 큐레이팅 카운터 증감
    ///
    /// 큐레이팅 등록/삭제 시 비정규화된 `curation_count`를 `$inc`로
    /// 갱신합니다. 카운터가 바뀌므로 해당 스타일 캐시도 무효화합니다.
    pub async fn adjust_curation_count(&self, id: &ObjectId, delta: i64) -> Result<(), AppError> {
        self.collection::<Style>()
            .update_one(
                doc! { "_id": *id },
                doc! { "$inc": { "curation_count": delta } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&id.to_hex()).await;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 목록 조회 성능을
    /// 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **생성일 인덱스**: `created_at` 내림차순 (최신순 목록 조회)
    /// 2. **태그 인덱스**: `tags` 멀티키 (태그 기반 조회)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Style>();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        // 태그 멀티키 인덱스
        let tags_index = IndexModel::builder()
            .keys(doc! { "tags": 1 })
            .options(IndexOptions::builder()
                .name("tags_multikey".to_string())
                .build())
            .build();

        collection
            .create_indexes([created_at_index, tags_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
