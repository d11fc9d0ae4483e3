//! 큐레이팅 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::curations::Curation;

/// 큐레이팅 단건 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationResponse {
    pub id: String,
    pub style_id: String,
    pub nickname: String,
    pub content: String,
    pub trendy: f64,
    pub personality: f64,
    pub practicality: f64,
    pub cost_effectiveness: f64,
    pub created_at: DateTime,
}

impl From<Curation> for CurationResponse {
    fn from(curation: Curation) -> Self {
        let Curation {
            id,
            style_id,
            nickname,
            content,
            trendy,
            personality,
            practicality,
            cost_effectiveness,
            created_at,
            ..
        } = curation;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            style_id: style_id.to_hex(),
            nickname,
            content,
            trendy,
            personality,
            practicality,
            cost_effectiveness,
            created_at,
        }
    }
}

/// 큐레이팅 목록 응답 (페이징 메타데이터 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationListResponse {
    pub data: Vec<CurationResponse>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}
