//! `banking-client` binary: parse flags, set up logging, load configuration,
//! run the command, exit with 0, 1 or 130.

use std::process::ExitCode;

use banking_client::app::{self, Args};
use banking_client::core::ClientError;
use banking_client::debug::{self, LogConfig};
use clap::Parser;
use lib_core::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log = debug::init_logger(&LogConfig::from_env(args.debug));
    if args.debug {
        tracing::debug!("Debug logging enabled");
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return ExitCode::from(app::report_error(&ClientError::from(e))),
    };
    log.apply_level(&config.log_level);

    tokio::select! {
        code = app::run(&args, config) => code,
        _ = interrupted() => {
            tracing::info!("Operation cancelled by user");
            eprintln!("\nOperation cancelled by user\n");
            ExitCode::from(app::EXIT_INTERRUPTED)
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the signal handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
