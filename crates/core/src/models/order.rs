//! Order model - danh sách (item, quantity) và tổng tiền
//!
//! Order giữ `Arc<Item>` chứ không copy item, nên một item có thể nằm trong
//! nhiều order. Thêm cùng một item (theo `id`) hai lần sẽ cộng dồn quantity
//! vào dòng đã có, vị trí dòng giữ theo lần thêm đầu tiên.

use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::models::{decimal_to_json, Item};

/// Một dòng trong order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    item: Arc<Item>,
    quantity: u32,
}

impl LineItem {
    pub fn item(&self) -> &Arc<Item> {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`, chưa làm tròn
    pub fn subtotal(&self) -> Decimal {
        self.item.price() * Decimal::from(self.quantity)
    }

    fn to_hash(&self) -> Value {
        json!({
            "id": self.item.id(),
            "name": self.item.name(),
            "price": decimal_to_json(self.item.price()),
            "quantity": self.quantity,
            "subtotal": decimal_to_json(self.subtotal()),
        })
    }
}

/// Order model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<LineItem>,
}

impl Order {
    /// Tạo order rỗng
    pub fn new() -> Self {
        Self::default()
    }

    /// Thêm item với số lượng `quantity` (phải >= 1).
    ///
    /// Nếu subtotal của dòng hoặc tổng order vượt phạm vi `Decimal` thì trả về
    /// `InvalidValue` và order giữ nguyên, nên `total()` không bao giờ tràn.
    pub fn add_item(&mut self, item: Arc<Item>, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(CoreError::invalid_value("quantity", "must be at least 1"));
        }

        let overflow = || CoreError::invalid_value("quantity", format!("overflow for item {}", item.id()));
        let existing = self.lines.iter().position(|l| l.item.id() == item.id());

        // dòng đã có giữ Arc<Item> ban đầu, giá tính theo nó
        let (price, new_quantity) = match existing.and_then(|pos| self.lines.get(pos)) {
            Some(line) => (line.item.price(), line.quantity.checked_add(quantity).ok_or_else(overflow)?),
            None => (item.price(), quantity),
        };
        let subtotal = price.checked_mul(Decimal::from(new_quantity)).ok_or_else(overflow)?;
        self.lines
            .iter()
            .enumerate()
            .filter(|(pos, _)| Some(*pos) != existing)
            .try_fold(subtotal, |sum, (_, line)| sum.checked_add(line.subtotal()))
            .ok_or_else(overflow)?;

        match existing.and_then(|pos| self.lines.get_mut(pos)) {
            Some(line) => {
                line.quantity = new_quantity;
                log::debug!("Merged item {} into order, quantity now {}", item.id(), new_quantity);
            }
            None => {
                log::debug!("Added item {} x{} to order", item.id(), quantity);
                self.lines.push(LineItem { item, quantity });
            }
        }
        Ok(())
    }

    /// Tổng tiền, tính lại mỗi lần gọi
    pub fn total(&self) -> Decimal {
        self.calculate_total()
    }

    fn calculate_total(&self) -> Decimal {
        self.lines.iter().map(LineItem::subtotal).sum()
    }

    /// Các dòng theo thứ tự thêm lần đầu
    pub fn items(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `{ "items": [...], "total": <number> }`
    pub fn to_hash(&self) -> Value {
        let items: Vec<Value> = self.lines.iter().map(LineItem::to_hash).collect();
        json!({
            "items": items,
            "total": decimal_to_json(self.total()),
        })
    }
}
