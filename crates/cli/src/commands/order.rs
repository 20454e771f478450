//! Order command

use anyhow::{anyhow, Result};
use clap::Args;
use rust_decimal::Decimal;
use shopkit_core::{Item, OrderService};
use shopkit_utils::{calculate_tax, format_currency_with, truncate, AppConfig};
use std::sync::Arc;

/// Một dòng `NAME:PRICE:QTY` từ command line
#[derive(Debug, Clone, PartialEq)]
pub struct LineArg {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

fn parse_line(raw: &str) -> Result<LineArg> {
    // tách từ phải để name được phép chứa ':'
    let mut parts = raw.rsplitn(3, ':');
    let (quantity, price, name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(q), Some(p), Some(n)) if !n.trim().is_empty() => (q, p, n),
        _ => return Err(anyhow!("expected NAME:PRICE:QTY, got '{}'", raw)),
    };

    Ok(LineArg {
        name: name.trim().to_string(),
        price: price.trim().parse()?,
        quantity: quantity.trim().parse()?,
    })
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Line item as NAME:PRICE:QTY (repeatable)
    #[arg(short, long = "item", value_parser = parse_line, required = true)]
    pub items: Vec<LineArg>,

    /// Owner user ID
    #[arg(short, long, default_value_t = 0)]
    pub user_id: u64,
}

pub fn handle(args: OrderArgs, config: &AppConfig) -> Result<()> {
    let mut service = OrderService::new();
    let order_id = service.create_order(args.user_id).id();

    for (idx, line) in args.items.into_iter().enumerate() {
        let item = Item::new(idx as u64 + 1, line.name, line.price)?;
        service.add_item_to_order(order_id, Arc::new(item), line.quantity)?;
    }

    let money = |amount: Decimal| format_currency_with(amount, &config.currency_symbol);
    let record = service.get_order(order_id)?;

    println!("🧾 Order #{} (user {}):", record.id(), record.user_id());
    for line in record.order().items() {
        println!(
            "  - {:<20} {:>4} x {:>10} = {:>10}",
            truncate(line.item().name(), 20, "..."),
            line.quantity(),
            money(line.item().price()),
            money(line.subtotal()),
        );
    }

    let subtotal = service.complete_order(order_id)?;
    let tax = calculate_tax(subtotal, config.tax_rate).ok_or_else(|| anyhow!("tax on {} overflows", subtotal))?;
    let total = subtotal
        .checked_add(tax)
        .ok_or_else(|| anyhow!("total with tax overflows"))?;
    println!("  Subtotal: {}", money(subtotal));
    println!("  Tax ({}): {}", config.tax_rate, money(tax));
    println!("  Total:    {}", money(total));

    println!("{}", serde_json::to_string_pretty(&service.get_order(order_id)?.to_hash())?);

    Ok(())
}
