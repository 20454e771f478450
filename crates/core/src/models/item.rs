//! Item model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::error::{CoreError, Result};
use crate::models::{as_object, decimal_field, decimal_to_json, str_field, u64_field};

const ITEM_FIELDS: [&str; 3] = ["id", "name", "price"];

/// Item trong catalog.
///
/// # Invariant
/// `price >= 0`, được kiểm tra trong constructor và khi deserialize.
///
/// Serde dùng cùng shape với `to_hash` (price là JSON number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Item {
    id: u64,
    name: String,
    price: Decimal,
}

impl TryFrom<Value> for Item {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self> {
        Item::from_hash(&value)
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        item.to_hash()
    }
}

impl Item {
    /// Tạo item mới. Giá âm trả về `InvalidValue`.
    pub fn new(id: u64, name: impl Into<String>, price: Decimal) -> Result<Self> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(CoreError::invalid_value(
                "price",
                format!("must not be negative, got {}", price),
            ));
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Giá sau khi giảm `percent` phần trăm, làm tròn 2 chữ số.
    ///
    /// `percent` ngoài [0, 100] không bị clamp: 150 cho ra giá âm, -10 là phụ thu.
    /// Kết quả vượt phạm vi `Decimal` trả về `InvalidValue`.
    pub fn discounted_price(&self, percent: Decimal) -> Result<Decimal> {
        shopkit_utils::calculate_discount(self.price, percent).ok_or_else(|| {
            CoreError::invalid_value("percent", format!("discount of {}% overflows", percent))
        })
    }

    /// `Widget - $29.99`
    pub fn description(&self) -> String {
        self.description_with(shopkit_utils::DEFAULT_CURRENCY_SYMBOL)
    }

    /// Như `description` nhưng với ký hiệu tiền tệ tùy chọn
    pub fn description_with(&self, symbol: &str) -> String {
        format!("{} - {}", self.name, shopkit_utils::format_currency_with(self.price, symbol))
    }

    /// JSON object với key `id`, `name`, `price` (price là number)
    pub fn to_hash(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "price": decimal_to_json(self.price),
        })
    }

    /// Dựng lại item từ object của `to_hash`. `price` nhận number hoặc string.
    pub fn from_hash(value: &Value) -> Result<Self> {
        let map = as_object(value, "item", &ITEM_FIELDS)?;
        Self::new(
            u64_field(map, "id")?,
            str_field(map, "name")?,
            decimal_field(map, "price")?,
        )
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_item() {
        let item = Item::new(1, "Widget", dec!(29.99)).unwrap();
        assert_eq!(item.id(), 1);
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price(), dec!(29.99));
    }

    #[test]
    fn test_free_item_allowed() {
        let item = Item::new(2, "Sticker", Decimal::ZERO).unwrap();
        assert!(item.price().is_zero());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Item::new(1, "Broken", dec!(-0.01)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_discounted_price() {
        let item = Item::new(1, "Widget", dec!(29.99)).unwrap();
        assert_eq!(item.discounted_price(dec!(10)).unwrap(), dec!(26.99));
        assert_eq!(item.discounted_price(dec!(0)).unwrap(), dec!(29.99));
        assert_eq!(item.discounted_price(dec!(100)).unwrap(), dec!(0));
        assert_eq!(item.discounted_price(dec!(33.333)).unwrap(), dec!(19.99));
    }

    #[test]
    fn test_discount_out_of_range_not_clamped() {
        let item = Item::new(1, "Widget", dec!(10)).unwrap();
        assert_eq!(item.discounted_price(dec!(150)).unwrap(), dec!(-5));
        assert_eq!(item.discounted_price(dec!(-10)).unwrap(), dec!(11));
    }

    #[test]
    fn test_discount_overflow_is_an_error() {
        let item = Item::new(1, "Yacht", Decimal::MAX / Decimal::TWO).unwrap();
        let err = item.discounted_price(dec!(-200)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { ref field, .. } if field == "percent"));

        // trong [0, 100] không bao giờ tràn, kể cả giá lớn nhất
        let max = Item::new(2, "Max", Decimal::MAX).unwrap();
        assert!(max.discounted_price(dec!(0)).is_ok());
        assert!(max.discounted_price(dec!(100)).is_ok());
    }

    #[test]
    fn test_description() {
        let item = Item::new(1, "Gadget", dec!(15.5)).unwrap();
        assert_eq!(item.description(), "Gadget - $15.50");
        assert_eq!(item.to_string(), item.description());
    }

    #[test]
    fn test_description_with_symbol() {
        let item = Item::new(1, "Gadget", dec!(15.5)).unwrap();
        assert_eq!(item.description_with("€"), "Gadget - €15.50");
    }

    #[test]
    fn test_hash_roundtrip() {
        let item = Item::new(9, "Widget", dec!(29.99)).unwrap();
        let hash = item.to_hash();
        assert_eq!(hash["price"], 29.99);
        assert_eq!(hash["price"].to_string(), "29.99");

        let back = Item::from_hash(&hash).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_hash_roundtrip_keeps_full_precision() {
        let prices = [
            dec!(12345678901234567.89),
            dec!(0.1234567890123456789),
            dec!(0.0000000000000000000000000001),
            dec!(10.500),
            Decimal::MAX,
        ];

        for price in prices {
            let item = Item::new(1, "Precise", price).unwrap();
            let hash = item.to_hash();
            assert_eq!(hash["price"].to_string(), price.to_string());

            let back = Item::from_hash(&hash).unwrap();
            assert_eq!(back.price(), price);
            assert_eq!(back.price().scale(), price.scale());

            // qua JSON text cũng giữ nguyên
            let text = serde_json::to_string(&hash).unwrap();
            let reparsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(Item::from_hash(&reparsed).unwrap().price(), price);
        }
    }

    #[test]
    fn test_from_hash_accepts_string_price() {
        let item = Item::from_hash(&json!({ "id": 1, "name": "Pen", "price": "1.25" })).unwrap();
        assert_eq!(item.price(), dec!(1.25));
    }

    #[test]
    fn test_from_hash_errors() {
        let err = Item::from_hash(&json!({ "id": 1, "name": "Pen" })).unwrap_err();
        assert!(matches!(err, CoreError::MissingField(ref f) if f == "price"));

        let err = Item::from_hash(&json!({ "id": 1, "name": "Pen", "price": -3 })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { .. }));

        let err = Item::from_hash(&json!({ "id": 1, "name": "Pen", "price": true })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { .. }));
    }

    #[test]
    fn test_deserialize_validates_price() {
        let ok: Item = serde_json::from_str(r#"{"id": 1, "name": "Pen", "price": "2.50"}"#).unwrap();
        assert_eq!(ok.price(), dec!(2.50));

        let ok: Item = serde_json::from_str(r#"{"id": 1, "name": "Pen", "price": 2.50}"#).unwrap();
        assert_eq!(ok.price(), dec!(2.50));

        let bad = serde_json::from_str::<Item>(r#"{"id": 1, "name": "Pen", "price": "-2"}"#);
        assert!(bad.is_err());

        let bad = serde_json::from_str::<Item>(r#"{"id": 1, "name": "Pen", "price": 2, "sku": "x"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_matches_to_hash() {
        let item = Item::new(3, "Lamp", dec!(42.10)).unwrap();
        assert_eq!(serde_json::to_value(&item).unwrap(), item.to_hash());
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":3,"name":"Lamp","price":42.10}"#
        );
    }
}
