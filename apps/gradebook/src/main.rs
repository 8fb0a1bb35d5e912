//! Gradebook binary entry point.

use clap::Parser;
use gradebook::cli::{self, Cli};
use gradebook::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "gradebook failed");
            ExitCode::FAILURE
        }
    }
}
