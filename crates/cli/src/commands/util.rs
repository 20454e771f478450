//! Util commands - math, string và currency helpers

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use shopkit_utils as utils;

#[derive(Args, Debug)]
pub struct UtilArgs {
    #[command(subcommand)]
    pub action: UtilAction,
}

#[derive(Subcommand, Debug)]
pub enum UtilAction {
    /// N-th Fibonacci number
    Fib { n: u32 },

    /// Factorial of N
    Fact { n: u32 },

    /// Check whether N is prime
    Prime { n: u64 },

    /// snake_case -> camelCase
    Camel { text: String },

    /// Capitalize a word
    Capitalize { text: String },

    /// Validate an email address
    Email { address: String },

    /// Sum a list of amounts
    Sum {
        #[arg(required = true)]
        values: Vec<Decimal>,
    },
}

pub fn handle(args: UtilArgs) -> Result<()> {
    match args.action {
        UtilAction::Fib { n } => {
            let value = utils::fibonacci(n).ok_or_else(|| anyhow!("fibonacci({}) overflows u64", n))?;
            println!("fibonacci({}) = {}", n, value);
        }
        UtilAction::Fact { n } => {
            let value = utils::factorial(n).ok_or_else(|| anyhow!("{}! overflows u64", n))?;
            println!("{}! = {}", n, value);
        }
        UtilAction::Prime { n } => {
            let verdict = if utils::is_prime(n) { "is" } else { "is not" };
            println!("{} {} prime", n, verdict);
        }
        UtilAction::Camel { text } => println!("{}", utils::snake_to_camel(&utils::trim(&text))),
        UtilAction::Capitalize { text } => println!("{}", utils::capitalize(&utils::trim(&text))),
        UtilAction::Email { address } => {
            if utils::validate_email(&address) {
                println!("✅ {} is valid", address);
            } else {
                println!("❌ {} is not a valid email", address);
            }
        }
        UtilAction::Sum { values } => println!("{}", utils::format_currency(utils::array_sum(&values))),
    }

    Ok(())
}
