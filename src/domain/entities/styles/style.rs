//! 스타일 게시물 엔티티
//!
//! MongoDB `styles` 컬렉션에 저장되는 스타일 게시물의 영속 모델입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::catalog::StyleComposition;

/// 스타일 게시물
///
/// 비밀번호는 bcrypt 해시로만 저장되며, 응답 DTO로 변환될 때 제외됩니다.
/// `curation_count`는 목록 조회 성능을 위한 비정규화 카운터로,
/// 큐레이팅 등록/삭제 시점에 함께 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub nickname: String,
    pub content: String,
    pub password_hash: String,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    /// 슬롯 → 아이템 구성. 검증 게이트를 통과한 값만 저장됩니다.
    pub categories: StyleComposition,
    /// 이 스타일에 등록된 큐레이팅 수 (비정규화)
    pub curation_count: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Style {
    /// 새 스타일 게시물을 생성합니다.
    ///
    /// ID는 저장 시 MongoDB가 할당하며, 생성/수정 시각은 현재 시각으로
    /// 초기화됩니다.
    pub fn new(
        title: String,
        nickname: String,
        content: String,
        password_hash: String,
        image_urls: Vec<String>,
        tags: Vec<String>,
        categories: StyleComposition,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            nickname,
            content,
            password_hash,
            image_urls,
            tags,
            categories,
            curation_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalog::{CategoryItem, CategorySlot};

    #[test]
    fn test_new_style_defaults() {
        let mut composition = StyleComposition::new();
        composition.insert(
            CategorySlot::Top,
            CategoryItem {
                name: "셔츠".to_string(),
                brand: "브랜드".to_string(),
                price: 10000.0,
            },
        );

        let style = Style::new(
            "여름 코디".to_string(),
            "민지".to_string(),
            "시원한 여름 스타일".to_string(),
            "$2b$04$hash".to_string(),
            vec!["https://img.example.com/1.jpg".to_string()],
            vec!["여름".to_string()],
            composition,
        );

        assert!(style.id.is_none());
        assert_eq!(style.curation_count, 0);
        assert_eq!(style.created_at, style.updated_at);
    }
}
