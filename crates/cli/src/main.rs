//! CLI Application

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use shopkit_utils::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    shopkit_utils::logger::init(config.effective_log_level())?;

    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::User(args) => commands::user::handle(args)?,
        Commands::Item(args) => commands::item::handle(args, &config)?,
        Commands::Order(args) => commands::order::handle(args, &config)?,
        Commands::Util(args) => commands::util::handle(args)?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}
