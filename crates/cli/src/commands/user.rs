//! User commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use shopkit_core::User;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Show info for a user
    Info {
        /// User ID
        #[arg(short, long)]
        id: u64,

        /// User name
        #[arg(short, long)]
        name: String,

        /// User email
        #[arg(short, long)]
        email: String,
    },

    /// Show the Guest user
    Guest,
}

pub fn handle(args: UserArgs) -> Result<()> {
    let user = match args.action {
        UserAction::Info { id, name, email } => {
            if !shopkit_utils::validate_email(&email) {
                bail!("Invalid email format: {}", email);
            }
            User::new(id, name, email)
        }
        UserAction::Guest => User::default_user(),
    };

    println!("👤 {}", user.full_info());
    println!("{}", serde_json::to_string_pretty(&user.to_hash())?);

    Ok(())
}
