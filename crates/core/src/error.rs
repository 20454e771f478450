//! Error types cho core library

use thiserror::Error;

/// Custom error type cho core library
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Tạo lỗi thiếu field
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField(field.to_string())
    }

    /// Tạo lỗi giá trị không hợp lệ
    pub fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias sử dụng CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
