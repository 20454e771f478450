//! Configuration utilities

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::helpers::DEFAULT_CURRENCY_SYMBOL;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub currency_symbol: String,
    /// Thuế suất dạng phân số (0.08 = 8%)
    pub tax_rate: Decimal,
    pub debug: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "shopkit".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            tax_rate: Decimal::new(8, 2),
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables, giá trị lỗi thì dùng default
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            tax_rate: lookup("TAX_RATE")
                .and_then(|v| Decimal::from_str(v.trim()).ok())
                .filter(|rate| !rate.is_sign_negative())
                .unwrap_or(defaults.tax_rate),
            debug: lookup("DEBUG")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.debug),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Log level hiệu lực: `debug` khi bật DEBUG
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }
}
