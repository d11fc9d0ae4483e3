//! 스타일 구성 요소(아이템) 정의

use serde::{Deserialize, Serialize};

/// 하나의 슬롯에 배치되는 의류 아이템
///
/// `name`과 `brand`는 비어 있지 않은 문자열, `price`는 0 이상의 숫자여야
/// 합니다. 이 불변식은 요청 검증 단계(`catalog::parse_composition`)에서
/// 강제되며, 검증을 통과한 뒤에만 이 타입으로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// 의상명
    pub name: String,
    /// 브랜드명
    pub brand: String,
    /// 가격 (0 이상)
    pub price: f64,
}
