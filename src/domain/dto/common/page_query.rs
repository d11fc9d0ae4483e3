//! 목록 조회 페이징 쿼리 DTO
//!
//! 스타일/큐레이팅 목록 조회가 공유하는 페이징 파라미터입니다.
//! 단순한 형태 검사만 필요하므로 `validator` 파생 검증을 사용하고,
//! 핸들러에서 첫 번째 메시지만 추출하여 단일 메시지 계약을 유지합니다.

use serde::Deserialize;
use validator::Validate;

use crate::config::PaginationConfig;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    PaginationConfig::DEFAULT_PAGE_SIZE
}

/// 페이징 쿼리 파라미터 (`?page=1&pageSize=10`)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1부터 시작하는 페이지 번호
    #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
    #[serde(default = "default_page")]
    pub page: u32,

    /// 페이지당 항목 수 (1~50)
    #[validate(range(min = 1, max = 50, message = "pageSize는 1부터 50 사이여야 합니다"))]
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageQuery {
    /// MongoDB 조회에 사용할 건너뛸 문서 수
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// MongoDB 조회에 사용할 최대 문서 수
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}
