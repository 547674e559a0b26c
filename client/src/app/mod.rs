//! # Command-Line Flow
//!
//! Drives one invocation of the client:
//!
//! ```text
//! build transfer request (when --from/--to/--amount given)
//!   │
//! open session
//!   ├── --auth           authenticate, then check the token (warning only)
//!   ├── --list-accounts  print all accounts
//!   ├── --history        print history; exit here when no transfer was asked for
//!   ├── --check-balance  print both balances (warning only)
//!   ├── --validate       both accounts must be valid, else exit 1
//!   └── transfer         print the receipt
//! ```
//!
//! The session closes when the flow returns, on every path.

pub mod args;
pub mod output;

use std::process::ExitCode;

use lib_core::Config;
use shared::TransferRequest;

use crate::core::error::{ClientError, Result};
use crate::services::api::BankingApiClient;
use crate::services::TransferService;

pub use args::Args;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
/// Exit status after Ctrl-C.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Run the command described by `args` against the configured server.
pub async fn run(args: &Args, config: Config) -> ExitCode {
    ExitCode::from(run_with(args, BankingApiClient::new(config)).await)
}

/// Run the command described by `args` through `client` and return the exit status.
pub async fn run_with(args: &Args, mut client: BankingApiClient) -> u8 {
    match execute(args, &mut client).await {
        Ok(code) => code,
        Err(e) => report_error(&e),
    }
}

async fn execute(args: &Args, client: &mut BankingApiClient) -> Result<u8> {
    // Nothing is sent for a request that cannot be valid.
    let request = args
        .transfer_parts()
        .map(|(from, to, amount)| TransferRequest::new(from, to, amount))
        .transpose()?;

    let session = client.open()?;
    let service = TransferService::new(&*session);

    if args.auth {
        tracing::info!("Retrieving authentication token...");
        match service.authenticate(&args.username, &args.password).await {
            Some(token) => {
                tracing::info!("Authentication successful");
                if service.validate_token(&token).await {
                    tracing::info!("Token validated successfully");
                } else {
                    tracing::warn!("Token validation failed");
                }
            }
            None => tracing::warn!("Authentication failed, proceeding without token"),
        }
    }

    if args.list_accounts {
        tracing::info!("Fetching accounts...");
        let accounts = service.list_accounts().await?;
        print!("{}", output::accounts(&accounts));
    }

    if args.history {
        tracing::info!("Fetching transaction history...");
        let account = args.from.as_deref().and_then(lib_utils::non_blank);
        match service.get_transaction_history(account, args.history_limit).await {
            Ok(records) => {
                print!("{}", output::history(&records, account, args.history_limit as usize));
                if request.is_none() {
                    return Ok(EXIT_SUCCESS);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not retrieve transaction history");
                if request.is_none() {
                    return Ok(EXIT_FAILURE);
                }
            }
        }
    }

    let Some(request) = request else {
        return Ok(EXIT_SUCCESS);
    };

    if args.check_balance {
        tracing::info!("Checking account balances...");
        let from = service.get_balance(request.from_account()).await;
        let to = service.get_balance(request.to_account()).await;
        match (from, to) {
            (Ok(from), Ok(to)) => print!("{}", output::balances(&from, &to)),
            (Err(e), _) | (_, Err(e)) => tracing::warn!(error = %e, "Could not retrieve balances"),
        }
    }

    if args.validate {
        tracing::info!("Validating accounts...");
        let from_valid = service.validate_account(request.from_account()).await;
        let to_valid = service.validate_account(request.to_account()).await;
        if !from_valid {
            tracing::error!(account = %request.from_account(), "Invalid source account");
            return Ok(EXIT_FAILURE);
        }
        if !to_valid {
            tracing::error!(account = %request.to_account(), "Invalid destination account");
            return Ok(EXIT_FAILURE);
        }
        tracing::info!("All accounts validated successfully");
    }

    tracing::info!("Initiating transfer: {}", request);
    let response = service.transfer(&request).await?;
    print!("{}", output::receipt(&response));
    tracing::info!(transaction_id = %response.transaction_id, "Transfer completed successfully");

    Ok(EXIT_SUCCESS)
}

/// Print `err` for the user and return the failure exit status.
pub fn report_error(err: &ClientError) -> u8 {
    match err {
        ClientError::Validation(e) => {
            tracing::error!(error = %e, "Invalid input");
            eprintln!("\nError: {}\n", e);
        }
        ClientError::Connection(message) => {
            tracing::error!(error = %message, "Connection error");
            eprintln!("\nConnection Error: {}\n", message);
        }
        ClientError::Api { message, .. } => {
            tracing::error!(error = %message, status = ?err.status_code(), "API error");
            eprintln!("\nAPI Error: {}\n", message);
        }
        ClientError::Transport(message) => {
            tracing::error!(error = %message, "Transport error");
            eprintln!("\nError: Request failed: {}\n", message);
        }
        ClientError::Config(e) => {
            tracing::error!(error = %e, "Configuration error");
            eprintln!("\nConfiguration Error: {}\n", e);
        }
        ClientError::NotInitialized => {
            tracing::error!(error = %err, "Unexpected error");
            eprintln!("\nUnexpected Error: {}\n", err);
        }
    }
    EXIT_FAILURE
}
