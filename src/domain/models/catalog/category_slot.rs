//! 스타일 구성 슬롯(카테고리) 정의
//!
//! 스타일 구성이 가질 수 있는 일곱 가지 의류 슬롯의 닫힌 열거형입니다.
//! 슬롯 명칭은 고정된 비즈니스 어휘이며 API 계약의 일부이므로,
//! 자유 형식 문자열 대신 합 타입으로 표현하여 알 수 없는 슬롯이
//! 문자열 파싱 경계에서만 거부 경로로 표현되도록 합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 와이어 포맷에서 사용하는 슬롯 이름 (선언 순서 고정)
const SLOT_NAMES: [&str; 7] = [
    "top", "bottom", "outer", "dress", "shoes", "bag", "accessory",
];

/// 스타일 구성 슬롯
///
/// 하나의 스타일 게시물은 슬롯별로 최대 하나의 구성 요소(아이템)를 가지며,
/// 일곱 슬롯 외의 키는 검증 단계에서 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategorySlot {
    /// 상의
    Top,
    /// 하의
    Bottom,
    /// 아우터
    Outer,
    /// 원피스
    Dress,
    /// 신발
    Shoes,
    /// 가방
    Bag,
    /// 패션잡화
    Accessory,
}

impl CategorySlot {
    /// 선언 순서대로 나열한 전체 슬롯
    pub const ALL: [CategorySlot; 7] = [
        CategorySlot::Top,
        CategorySlot::Bottom,
        CategorySlot::Outer,
        CategorySlot::Dress,
        CategorySlot::Shoes,
        CategorySlot::Bag,
        CategorySlot::Accessory,
    ];

    /// 와이어 포맷(JSON/BSON 키)에서 사용하는 슬롯 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySlot::Top => "top",
            CategorySlot::Bottom => "bottom",
            CategorySlot::Outer => "outer",
            CategorySlot::Dress => "dress",
            CategorySlot::Shoes => "shoes",
            CategorySlot::Bag => "bag",
            CategorySlot::Accessory => "accessory",
        }
    }

    /// 사용자에게 노출되는 한국어 명칭
    pub fn label(&self) -> &'static str {
        match self {
            CategorySlot::Top => "상의",
            CategorySlot::Bottom => "하의",
            CategorySlot::Outer => "아우터",
            CategorySlot::Dress => "원피스",
            CategorySlot::Shoes => "신발",
            CategorySlot::Bag => "가방",
            CategorySlot::Accessory => "패션잡화",
        }
    }
}

impl FromStr for CategorySlot {
    type Err = ();

    /// 와이어 이름을 슬롯으로 파싱합니다. 일곱 슬롯 외의 이름은 모두 실패합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(CategorySlot::Top),
            "bottom" => Ok(CategorySlot::Bottom),
            "outer" => Ok(CategorySlot::Outer),
            "dress" => Ok(CategorySlot::Dress),
            "shoes" => Ok(CategorySlot::Shoes),
            "bag" => Ok(CategorySlot::Bag),
            "accessory" => Ok(CategorySlot::Accessory),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CategorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 맵의 키로 쓰일 수 있도록 문자열로 직렬화합니다.
// (BSON 문서 키와 JSON 오브젝트 키 모두 문자열만 허용)
impl Serialize for CategorySlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategorySlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::unknown_variant(&s, &SLOT_NAMES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_wire_names_round_trip() {
        for slot in CategorySlot::ALL {
            let parsed: CategorySlot = slot.as_str().parse().unwrap();
            assert_eq!(parsed, slot);
        }
    }

    #[test]
    fn test_unknown_slot_rejected() {
        assert!("hat".parse::<CategorySlot>().is_err());
        assert!("".parse::<CategorySlot>().is_err());
        assert!("TOP".parse::<CategorySlot>().is_err());
        assert!("tops".parse::<CategorySlot>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&CategorySlot::Shoes).unwrap();
        assert_eq!(json, "\"shoes\"");

        let slot: CategorySlot = serde_json::from_str("\"bag\"").unwrap();
        assert_eq!(slot, CategorySlot::Bag);

        assert!(serde_json::from_str::<CategorySlot>("\"hat\"").is_err());
    }

    #[test]
    fn test_map_keys_serialize_as_strings() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(CategorySlot::Top, 1);
        map.insert(CategorySlot::Bag, 2);

        let json = serde_json::to_value(&map).unwrap();
        assert!(json.get("top").is_some());
        assert!(json.get("bag").is_some());
    }
}
