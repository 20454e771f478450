//! Business services - quản lý users và orders trong bộ nhớ

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::models::{Item, Order, User};

/// User Service - quản lý users
#[derive(Debug, Default)]
pub struct UserService {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl UserService {
    /// Tạo service mới
    pub fn new() -> Self {
        Self::default()
    }

    fn next_user_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn validate(name: &str, email: &str) -> Result<()> {
        let result = shopkit_utils::validate_user_fields(name, email);
        if result.is_valid {
            Ok(())
        } else {
            log::warn!("Rejected user fields: {:?}", result.errors);
            Err(CoreError::invalid_value("user", result.errors.join("; ")))
        }
    }

    /// Tạo user mới, id tăng dần từ 1
    pub fn create_user(&mut self, name: impl Into<String>, email: impl Into<String>) -> Result<User> {
        let (name, email) = (name.into(), email.into());
        Self::validate(&name, &email)?;

        let user = User::new(self.next_user_id(), name, email);
        self.users.insert(user.id(), user.clone());
        log::info!("Created user {}", user.id());

        Ok(user)
    }

    /// Lấy user theo id
    pub fn get_user(&self, id: u64) -> Result<User> {
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("User with id {} not found", id)))
    }

    /// Lấy tất cả users, sắp theo id
    pub fn get_all_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Cập nhật name/email. User cũ được thay bằng một User mới cùng id.
    pub fn update_user(&mut self, id: u64, name: Option<String>, email: Option<String>) -> Result<User> {
        let current = self.get_user(id)?;
        let name = name.unwrap_or_else(|| current.name().to_string());
        let email = email.unwrap_or_else(|| current.email().to_string());
        Self::validate(&name, &email)?;

        let updated = User::new(id, name, email);
        self.users.insert(id, updated.clone());
        log::info!("Updated user {}", id);

        Ok(updated)
    }

    /// Xóa user
    pub fn delete_user(&mut self, id: u64) -> Result<()> {
        self.users
            .remove(&id)
            .map(|_| log::info!("Deleted user {}", id))
            .ok_or_else(|| CoreError::NotFound(format!("User with id {} not found", id)))
    }
}

/// Trạng thái order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Order được service quản lý: order + chủ sở hữu + trạng thái
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    id: u64,
    user_id: u64,
    order: Order,
    status: OrderStatus,
}

impl OrderRecord {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Hash của order kèm `id`, `user_id`, `status`
    pub fn to_hash(&self) -> Value {
        let mut hash = self.order.to_hash();
        if let Value::Object(map) = &mut hash {
            map.insert("id".to_string(), json!(self.id));
            map.insert("user_id".to_string(), json!(self.user_id));
            map.insert("status".to_string(), json!(self.status.to_string()));
        }
        hash
    }
}

/// Order Service - quản lý orders
#[derive(Debug, Default)]
pub struct OrderService {
    orders: BTreeMap<u64, OrderRecord>,
    next_id: u64,
}

impl OrderService {
    /// Tạo service mới
    pub fn new() -> Self {
        Self::default()
    }

    fn next_order_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn not_found(id: u64) -> CoreError {
        CoreError::NotFound(format!("Order with id {} not found", id))
    }

    fn pending_mut(&mut self, id: u64) -> Result<&mut OrderRecord> {
        let record = self.orders.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        if record.status == OrderStatus::Completed {
            return Err(CoreError::InvalidState(format!("Order {} is already completed", id)));
        }
        Ok(record)
    }

    /// Tạo order rỗng cho user
    pub fn create_order(&mut self, user_id: u64) -> OrderRecord {
        let record = OrderRecord {
            id: self.next_order_id(),
            user_id,
            order: Order::new(),
            status: OrderStatus::Pending,
        };
        self.orders.insert(record.id, record.clone());
        log::info!("Created order {} for user {}", record.id, user_id);
        record
    }

    /// Lấy order theo id
    pub fn get_order(&self, id: u64) -> Result<&OrderRecord> {
        self.orders.get(&id).ok_or_else(|| Self::not_found(id))
    }

    /// Thêm item vào order đang pending
    pub fn add_item_to_order(&mut self, order_id: u64, item: Arc<Item>, quantity: u32) -> Result<()> {
        self.pending_mut(order_id)?.order.add_item(item, quantity)
    }

    /// Chốt order, trả về tổng tiền. Order rỗng không chốt được.
    pub fn complete_order(&mut self, id: u64) -> Result<Decimal> {
        let record = self.pending_mut(id)?;
        if record.order.is_empty() {
            return Err(CoreError::InvalidState(format!("Order {} has no items", id)));
        }

        record.status = OrderStatus::Completed;
        let total = record.order.total();
        log::info!("Completed order {} with total {}", id, total);

        Ok(total)
    }

    /// Các order của một user, sắp theo id
    pub fn get_orders_for_user(&self, user_id: u64) -> Vec<&OrderRecord> {
        self.orders
            .values()
            .filter(|record| record.user_id == user_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: u64, price: Decimal) -> Arc<Item> {
        Arc::new(Item::new(id, format!("Item {}", id), price).unwrap())
    }

    #[test]
    fn test_user_service_crud() {
        let mut service = UserService::new();

        // Create
        let user = service.create_user("Alice", "alice@example.com").unwrap();
        assert_eq!(user.id(), 1);
        let second = service.create_user("Bob", "bob@example.com").unwrap();
        assert_eq!(second.id(), 2);

        // Read
        let fetched = service.get_user(1).unwrap();
        assert_eq!(fetched.name(), "Alice");

        // List
        let names: Vec<String> = service.get_all_users().iter().map(|u| u.name().to_string()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        // Update
        let updated = service.update_user(1, None, Some("alice@new.io".to_string())).unwrap();
        assert_eq!(updated.name(), "Alice");
        assert_eq!(service.get_user(1).unwrap().email(), "alice@new.io");

        // Delete
        service.delete_user(1).unwrap();
        assert!(matches!(service.get_user(1), Err(CoreError::NotFound(_))));
        assert!(service.delete_user(1).is_err());
    }

    #[test]
    fn test_user_service_validates() {
        let mut service = UserService::new();
        assert!(matches!(
            service.create_user("Alice", "not-an-email"),
            Err(CoreError::InvalidValue { .. })
        ));
        assert!(service.create_user("", "a@example.com").is_err());
        assert!(service.get_all_users().is_empty());

        service.create_user("Alice", "alice@example.com").unwrap();
        assert!(service.update_user(1, None, Some("bad".to_string())).is_err());
        assert_eq!(service.get_user(1).unwrap().email(), "alice@example.com");
        assert!(matches!(service.update_user(9, None, None), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_order_service_flow() {
        let mut service = OrderService::new();
        let record = service.create_order(7);
        assert_eq!(record.id(), 1);
        assert_eq!(record.status(), OrderStatus::Pending);

        service.add_item_to_order(1, item(1, dec!(10.00)), 2).unwrap();
        service.add_item_to_order(1, item(2, dec!(15.50)), 1).unwrap();
        assert_eq!(service.get_order(1).unwrap().order().len(), 2);

        let total = service.complete_order(1).unwrap();
        assert_eq!(total, dec!(35.50));
        assert_eq!(service.get_order(1).unwrap().status(), OrderStatus::Completed);
    }

    #[test]
    fn test_completed_order_is_frozen() {
        let mut service = OrderService::new();
        service.create_order(1);
        service.add_item_to_order(1, item(1, dec!(1)), 1).unwrap();
        service.complete_order(1).unwrap();

        assert!(matches!(
            service.add_item_to_order(1, item(2, dec!(1)), 1),
            Err(CoreError::InvalidState(_))
        ));
        assert!(matches!(service.complete_order(1), Err(CoreError::InvalidState(_))));
        assert_eq!(service.get_order(1).unwrap().order().len(), 1);
    }

    #[test]
    fn test_empty_order_cannot_complete() {
        let mut service = OrderService::new();
        service.create_order(1);
        assert!(matches!(service.complete_order(1), Err(CoreError::InvalidState(_))));
        assert_eq!(service.get_order(1).unwrap().status(), OrderStatus::Pending);
    }

    #[test]
    fn test_unknown_order() {
        let mut service = OrderService::new();
        assert!(matches!(service.get_order(42), Err(CoreError::NotFound(_))));
        assert!(matches!(
            service.add_item_to_order(42, item(1, dec!(1)), 1),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_orders_for_user() {
        let mut service = OrderService::new();
        service.create_order(1);
        service.create_order(2);
        service.create_order(1);

        let ids: Vec<u64> = service.get_orders_for_user(1).iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(service.get_orders_for_user(99).is_empty());
    }

    #[test]
    fn test_record_to_hash() {
        let mut service = OrderService::new();
        service.create_order(5);
        service.add_item_to_order(1, item(1, dec!(2.50)), 2).unwrap();

        let hash = service.get_order(1).unwrap().to_hash();
        assert_eq!(hash["id"], 1);
        assert_eq!(hash["user_id"], 5);
        assert_eq!(hash["status"], "pending");
        assert_eq!(hash["total"], 5.0);
    }
}
