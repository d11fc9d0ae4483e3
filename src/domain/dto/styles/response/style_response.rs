//! 스타일 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::styles::Style;
use crate::domain::models::catalog::StyleComposition;

/// 스타일 상세/목록 항목 응답
///
/// 엔티티에서 변환될 때 비밀번호 해시는 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleResponse {
    pub id: String,
    pub title: String,
    pub nickname: String,
    pub content: String,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    pub categories: StyleComposition,
    /// 연결된 큐레이팅 개수
    pub curation_count: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Style> for StyleResponse {
    fn from(style: Style) -> Self {
        let Style {
            id,
            title,
            nickname,
            content,
            image_urls,
            tags,
            categories,
            curation_count,
            created_at,
            updated_at,
            ..
        } = style;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            nickname,
            content,
            image_urls,
            tags,
            categories,
            curation_count,
            created_at,
            updated_at,
        }
    }
}

/// 스타일 목록 응답 (페이징 메타데이터 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleListResponse {
    pub data: Vec<StyleResponse>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalog::{CategoryItem, CategorySlot};

    #[test]
    fn test_response_excludes_password_hash() {
        let mut composition = StyleComposition::new();
        composition.insert(
            CategorySlot::Shoes,
            CategoryItem {
                name: "스니커즈".to_string(),
                brand: "나이키".to_string(),
                price: 99000.0,
            },
        );

        let style = Style::new(
            "제목".to_string(),
            "닉네임".to_string(),
            "내용".to_string(),
            "$2b$04$secret".to_string(),
            vec!["u1".to_string()],
            vec![],
            composition,
        );

        let response = StyleResponse::from(style);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["curationCount"], 0);
        assert!(json["categories"].get("shoes").is_some());
    }
}
