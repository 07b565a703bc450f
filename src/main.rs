use std::process::ExitCode;

use awardwallet::cli::{self, Cli};
use awardwallet::logging;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up AWARDWALLET_* from a local .env when present
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let logging_ready = match logging::init(args.verbose, args.json_logs) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            false
        }
    };

    match cli::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Failures must reach stderr even when logging is off
            if logging_ready && tracing::enabled!(tracing::Level::ERROR) {
                tracing::error!("{e:#}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
