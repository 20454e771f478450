//! User model

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::error::Result;
use crate::models::{as_object, str_field, u64_field};

const USER_FIELDS: [&str; 3] = ["id", "name", "email"];

/// User model. Không có setter: mọi field cố định sau khi tạo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: u64,
    name: String,
    email: String,
}

impl User {
    /// Tạo user mới
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// User "Guest" dùng khi chưa đăng nhập
    pub fn default_user() -> Self {
        Self::new(0, "Guest", "guest@example.com")
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Bản sao với email mới, giữ nguyên id và name
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    /// `Alice (ID: 1) <alice@example.com>`
    pub fn full_info(&self) -> String {
        format!("{} (ID: {}) <{}>", self.name, self.id, self.email)
    }

    /// JSON object với đúng 3 key `id`, `name`, `email`
    pub fn to_hash(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
        })
    }

    /// Dựng lại user từ object của `to_hash`
    pub fn from_hash(value: &Value) -> Result<Self> {
        let map = as_object(value, "user", &USER_FIELDS)?;
        Ok(Self::new(
            u64_field(map, "id")?,
            str_field(map, "name")?,
            str_field(map, "email")?,
        ))
    }

    /// Parse JSON string rồi `from_hash`
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_hash(&value)
    }
}

impl Default for User {
    fn default() -> Self {
        Self::default_user()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_info())
    }
}
