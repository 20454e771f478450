//! Logger setup (env_logger)

use log::SetLoggerError;

/// Khởi tạo env_logger. `RUST_LOG` được ưu tiên, nếu không có thì dùng `default_level`.
pub fn init(default_level: &str) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
}
