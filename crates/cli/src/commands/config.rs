//! Config command

use anyhow::Result;
use shopkit_utils::AppConfig;

pub fn handle(config: &AppConfig) -> Result<()> {
    println!("⚙️  Current Configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);
    println!();
    println!("📍 Log level: {}", config.effective_log_level());

    Ok(())
}
