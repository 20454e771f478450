//! Core library - Models và services của shopkit
//!
//! Crate này chứa các entity `User`, `Item`, `Order`, error types và
//! các service quản lý users/orders trong bộ nhớ.

pub mod error;
pub mod models;
pub mod services;

pub use error::{CoreError, Result};
pub use models::*;
pub use services::*;
