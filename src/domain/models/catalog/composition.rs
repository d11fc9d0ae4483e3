//! 스타일 구성(categories) 검증 및 변환
//!
//! 요청 본문의 `categories` 값을 구조적·의미적으로 검증하고, 통과한 경우
//! 슬롯 → 아이템의 타입 있는 매핑으로 변환합니다. 슬롯 어휘는 닫힌
//! 집합이므로 정의되지 않은 키는 조용히 무시하지 않고 즉시 거부합니다.
//! 오타가 난 슬롯이나 악의적인 키가 그대로 저장되면 하위 집계(가격 합계
//! 등)가 오염되기 때문입니다.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::utils::validation::is_valid_string;

use super::{CategoryItem, CategorySlot};

/// 슬롯 → 아이템 매핑. 슬롯 선언 순서로 정렬됩니다.
pub type StyleComposition = BTreeMap<CategorySlot, CategoryItem>;

/// `categories` 값을 검증하고 타입 있는 구성으로 변환합니다.
///
/// 검증 순서 (첫 위반에서 즉시 중단):
///
/// 1. 객체 형태 확인: 배열이나 스칼라는 타입 혼동으로 거부
/// 2. 모든 키가 허용된 슬롯인지 확인: 알 수 없는 키는 즉시 거부
/// 3. null이 아닌 아이템의 필드 불변식 확인: 부분적으로만 유효한
///    아이템도 전체 요청을 거부
/// 4. 유효한 아이템이 하나도 없으면 거부
///
/// 순수 함수이므로 같은 입력에 대해 항상 같은 결과를 반환합니다.
pub fn parse_composition(value: &Value) -> AppResult<StyleComposition> {
    let entries = match value.as_object() {
        Some(entries) => entries,
        None => {
            return Err(AppError::ValidationError(
                "categories는 객체 형태로 전달되어야 합니다.".to_string(),
            ));
        }
    };

    let mut composition = StyleComposition::new();

    for (key, item) in entries {
        let slot: CategorySlot = key.parse().map_err(|_| {
            AppError::ValidationError(format!(
                "허용되지 않은 스타일 구성 타입입니다: {}",
                key
            ))
        })?;

        // null 슬롯은 "해당 슬롯 없음"을 의미하므로 건너뜁니다
        if item.is_null() {
            continue;
        }

        composition.insert(slot, parse_category_item(slot, item)?);
    }

    if composition.is_empty() {
        return Err(AppError::ValidationError(
            "스타일 구성(categories)에는 최소한 하나의 유효한 아이템 타입이 포함되어야 합니다."
                .to_string(),
        ));
    }

    Ok(composition)
}

/// 구성 전체를 검증만 하고 변환 결과는 버립니다 (검증 게이트용).
pub fn validate_composition(value: &Value) -> AppResult<()> {
    parse_composition(value).map(|_| ())
}

/// 단일 슬롯 아이템의 필드 불변식을 검증하고 변환합니다.
///
/// `name`/`brand`는 비어 있지 않은 문자열, `price`는 0 이상의 숫자여야
/// 합니다. 가격은 숫자 타입만 허용하며 문자열 표기는 받지 않습니다.
fn parse_category_item(slot: CategorySlot, item: &Value) -> AppResult<CategoryItem> {
    let incomplete = || {
        AppError::ValidationError(format!(
            "스타일 구성 요소 '{}'의 정보가 부족하거나 유효하지 않습니다. (name, brand, price 필수)",
            slot
        ))
    };

    let fields = item.as_object().ok_or_else(incomplete)?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| is_valid_string(s))
        .ok_or_else(incomplete)?;

    let brand = fields
        .get("brand")
        .and_then(Value::as_str)
        .filter(|s| is_valid_string(s))
        .ok_or_else(incomplete)?;

    let price = fields
        .get("price")
        .and_then(Value::as_f64)
        .ok_or_else(incomplete)?;

    if price < 0.0 {
        return Err(AppError::ValidationError(format!(
            "스타일 구성 요소 '{}'의 가격은 0 이상이어야 합니다.",
            slot
        )));
    }

    Ok(CategoryItem {
        name: name.to_string(),
        brand: brand.to_string(),
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_item() -> Value {
        json!({ "name": "울 니트", "brand": "유니클로", "price": 39900 })
    }

    #[test]
    fn test_single_valid_slot() {
        let categories = json!({ "top": valid_item() });
        let composition = parse_composition(&categories).unwrap();

        assert_eq!(composition.len(), 1);
        let item = composition.get(&CategorySlot::Top).unwrap();
        assert_eq!(item.name, "울 니트");
        assert_eq!(item.brand, "유니클로");
        assert_eq!(item.price, 39900.0);
    }

    #[test]
    fn test_all_seven_slots_accepted() {
        let mut categories = serde_json::Map::new();
        for slot in CategorySlot::ALL {
            categories.insert(slot.as_str().to_string(), valid_item());
        }
        let composition = parse_composition(&Value::Object(categories)).unwrap();
        assert_eq!(composition.len(), 7);
    }

    #[test]
    fn test_unknown_slot_rejected_with_key_in_message() {
        let categories = json!({
            "hat": { "name": "볼캡", "brand": "MLB", "price": 1 }
        });
        let err = parse_composition(&categories).unwrap_err();
        assert!(err.to_string().contains("hat"));
    }

    #[test]
    fn test_unknown_slot_rejected_even_with_valid_slots_present() {
        let categories = json!({
            "top": valid_item(),
            "hat": valid_item(),
        });
        assert!(parse_composition(&categories).is_err());
    }

    #[test]
    fn test_array_rejected_as_type_confusion() {
        let categories = json!([{ "name": "x", "brand": "y", "price": 1 }]);
        let err = parse_composition(&categories).unwrap_err();
        assert!(err.to_string().contains("객체 형태"));
    }

    #[test]
    fn test_scalar_rejected_as_type_confusion() {
        assert!(parse_composition(&json!("top")).is_err());
        assert!(parse_composition(&json!(7)).is_err());
    }

    #[test]
    fn test_empty_object_rejected() {
        let err = parse_composition(&json!({})).unwrap_err();
        assert!(err.to_string().contains("최소한 하나"));
    }

    #[test]
    fn test_all_null_slots_rejected() {
        let categories = json!({ "top": null, "shoes": null });
        assert!(parse_composition(&categories).is_err());
    }

    #[test]
    fn test_null_slot_skipped_when_valid_item_present() {
        let categories = json!({ "top": valid_item(), "shoes": null });
        let composition = parse_composition(&categories).unwrap();
        assert_eq!(composition.len(), 1);
        assert!(!composition.contains_key(&CategorySlot::Shoes));
    }

    #[test]
    fn test_negative_price_rejected() {
        let categories = json!({
            "top": { "name": "니트", "brand": "브랜드", "price": -100 }
        });
        let err = parse_composition(&categories).unwrap_err();
        assert!(err.to_string().contains("0 이상"));
    }

    #[test]
    fn test_zero_price_accepted() {
        let categories = json!({
            "top": { "name": "니트", "brand": "브랜드", "price": 0 }
        });
        assert!(parse_composition(&categories).is_ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        // name 누락
        assert!(parse_composition(&json!({
            "top": { "brand": "브랜드", "price": 100 }
        })).is_err());
        // brand 빈 문자열
        assert!(parse_composition(&json!({
            "top": { "name": "니트", "brand": "  ", "price": 100 }
        })).is_err());
        // price 누락
        assert!(parse_composition(&json!({
            "top": { "name": "니트", "brand": "브랜드" }
        })).is_err());
    }

    #[test]
    fn test_string_price_rejected() {
        // 가격은 숫자 타입이어야 하며 문자열 표기는 허용하지 않음
        let categories = json!({
            "top": { "name": "니트", "brand": "브랜드", "price": "1000" }
        });
        assert!(parse_composition(&categories).is_err());
    }

    #[test]
    fn test_non_object_item_rejected() {
        assert!(parse_composition(&json!({ "top": "셔츠" })).is_err());
        assert!(parse_composition(&json!({ "top": 123 })).is_err());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let categories = json!({ "top": valid_item() });
        let first = parse_composition(&categories).unwrap();
        let second = parse_composition(&categories).unwrap();
        assert_eq!(first, second);
    }
}
