//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// Banking client - transfer funds between accounts
#[derive(Parser, Debug, Clone)]
#[command(name = "banking-client")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  banking-client --from ACC1000 --to ACC1001 --amount 100.00
  banking-client --from ACC1000 --to ACC1001 --amount 250.50 --auth --validate
  banking-client --auth --history --history-limit 5
  banking-client --from ACC1000 --to ACC1001 --amount 50 --config config/custom.json")]
pub struct Args {
    /// Source account number (e.g., ACC1000)
    #[arg(long, value_name = "ACCOUNT", required_unless_present_any = ["history", "list_accounts"])]
    pub from: Option<String>,

    /// Destination account number (e.g., ACC1001)
    #[arg(long, value_name = "ACCOUNT", required_unless_present_any = ["history", "list_accounts"])]
    pub to: Option<String>,

    /// Transfer amount (e.g., 100.00)
    #[arg(long, required_unless_present_any = ["history", "list_accounts"])]
    pub amount: Option<Decimal>,

    /// Obtain a JWT from /authToken before anything else
    #[arg(long)]
    pub auth: bool,

    /// Username for --auth
    #[arg(long, default_value = "alice")]
    pub username: String,

    /// Password for --auth
    #[arg(long, default_value = "any")]
    pub password: String,

    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validate both accounts before transferring
    #[arg(long)]
    pub validate: bool,

    /// Show both balances before transferring
    #[arg(long)]
    pub check_balance: bool,

    /// Show transaction history (requires --auth)
    #[arg(long, requires = "auth")]
    pub history: bool,

    /// Number of transactions to show with --history
    #[arg(long, default_value_t = 10)]
    pub history_limit: u32,

    /// List all accounts
    #[arg(long)]
    pub list_accounts: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Source, destination and amount, when all three were given.
    pub fn transfer_parts(&self) -> Option<(&str, &str, Decimal)> {
        match (&self.from, &self.to, self.amount) {
            (Some(from), Some(to), Some(amount)) => Some((from, to, amount)),
            _ => None,
        }
    }
}
