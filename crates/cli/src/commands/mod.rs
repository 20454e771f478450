//! CLI Commands

pub mod config;
pub mod item;
pub mod order;
pub mod user;
pub mod util;

use clap::{Parser, Subcommand};

/// Shopkit CLI - users, items, orders và các tiện ích
#[derive(Parser, Debug)]
#[command(name = "shopkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show user info
    User(user::UserArgs),

    /// Describe items and discounts
    Item(item::ItemArgs),

    /// Build an order and print its totals
    Order(order::OrderArgs),

    /// Math and string helpers
    Util(util::UtilArgs),

    /// Show configuration
    Config,
}
