//! Utils library - Các hàm tiện ích dùng chung
//!
//! Tiền tệ, chiết khấu/thuế, validation, math, string helpers, config và logger.

pub mod config;
pub mod helpers;
pub mod logger;
pub mod math;
pub mod strings;
pub mod validation;

pub use config::*;
pub use helpers::*;
pub use math::*;
pub use strings::*;
pub use validation::*;
