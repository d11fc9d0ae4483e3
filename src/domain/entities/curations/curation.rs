//! 큐레이팅(스타일 평가) 엔티티
//!
//! MongoDB `curations` 컬렉션에 저장되는, 스타일 게시물에 달린
//! 점수 평가의 영속 모델입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 스타일에 대한 큐레이팅
///
/// 네 가지 점수 항목은 검증 게이트에서 [0, 10] 범위로 확인된 값만
/// 저장됩니다. 비밀번호는 bcrypt 해시로만 보관됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 큐레이팅이 달린 스타일의 ID
    pub style_id: ObjectId,
    pub nickname: String,
    pub content: String,
    pub password_hash: String,
    /// 트렌디 점수 (0~10)
    pub trendy: f64,
    /// 개성 점수 (0~10)
    pub personality: f64,
    /// 실용성 점수 (0~10)
    pub practicality: f64,
    /// 가성비 점수 (0~10)
    pub cost_effectiveness: f64,
    pub created_at: DateTime,
}

impl Curation {
    /// 새 큐레이팅을 생성합니다.
    pub fn new(
        style_id: ObjectId,
        nickname: String,
        content: String,
        password_hash: String,
        trendy: f64,
        personality: f64,
        practicality: f64,
        cost_effectiveness: f64,
    ) -> Self {
        Self {
            id: None,
            style_id,
            nickname,
            content,
            password_hash,
            trendy,
            personality,
            practicality,
            cost_effectiveness,
            created_at: DateTime::now(),
        }
    }
}
