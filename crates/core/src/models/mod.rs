//! Models/Entities của ứng dụng
//!
//! Mỗi entity có `to_hash()` trả về một JSON object phẳng và `from_hash()`
//! để dựng lại entity từ object đó.

pub mod item;
pub mod order;
pub mod user;

pub use item::Item;
pub use order::{LineItem, Order};
pub use user::User;

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Lấy JSON object, kiểm tra không có key lạ
pub(crate) fn as_object<'a>(
    value: &'a Value,
    entity: &str,
    allowed: &[&str],
) -> Result<&'a Map<String, Value>> {
    let map = value
        .as_object()
        .ok_or_else(|| CoreError::invalid_value(entity, "expected a JSON object"))?;

    if let Some(unknown) = map.keys().find(|k| !allowed.contains(&k.as_str())) {
        return Err(CoreError::invalid_value(unknown, format!("unknown field for {}", entity)));
    }

    Ok(map)
}

fn field<'a>(map: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    match map.get(name) {
        Some(Value::Null) | None => Err(CoreError::missing_field(name)),
        Some(value) => Ok(value),
    }
}

pub(crate) fn u64_field(map: &Map<String, Value>, name: &str) -> Result<u64> {
    field(map, name)?
        .as_u64()
        .ok_or_else(|| CoreError::invalid_value(name, "expected a non-negative integer"))
}

pub(crate) fn str_field(map: &Map<String, Value>, name: &str) -> Result<String> {
    field(map, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CoreError::invalid_value(name, "expected a string"))
}

/// Decimal nhận cả JSON number lẫn string
pub(crate) fn decimal_field(map: &Map<String, Value>, name: &str) -> Result<Decimal> {
    let raw = match field(map, name)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(CoreError::invalid_value(name, "expected a number")),
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|e| CoreError::invalid_value(name, e.to_string()))
}

/// Decimal -> JSON number. Với `arbitrary_precision`, Number giữ nguyên chuỗi
/// thập phân nên `decimal_field` đọc lại đúng Decimal ban đầu (kể cả scale).
pub(crate) fn decimal_to_json(amount: Decimal) -> Value {
    let raw = amount.to_string();
    match Number::from_str(&raw) {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(raw),
    }
}
