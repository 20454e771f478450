//! Item commands

use anyhow::Result;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use shopkit_core::Item;
use shopkit_utils::{format_currency_with, AppConfig};

#[derive(Args, Debug)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub action: ItemAction,
}

#[derive(Subcommand, Debug)]
pub enum ItemAction {
    /// Describe an item, optionally with a discount
    Describe {
        /// Item ID
        #[arg(short, long, default_value_t = 1)]
        id: u64,

        /// Item name
        #[arg(short, long)]
        name: String,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Discount percent (0-100)
        #[arg(short, long)]
        discount: Option<Decimal>,
    },
}

pub fn handle(args: ItemArgs, config: &AppConfig) -> Result<()> {
    match args.action {
        ItemAction::Describe { id, name, price, discount } => {
            let item = Item::new(id, name, price)?;
            println!("📦 {}", item.description_with(&config.currency_symbol));

            if let Some(percent) = discount {
                let discounted = item.discounted_price(percent)?;
                println!(
                    "🏷️  {}% off: {}",
                    percent,
                    format_currency_with(discounted, &config.currency_symbol)
                );
            }

            println!("{}", serde_json::to_string_pretty(&item.to_hash())?);
        }
    }

    Ok(())
}
