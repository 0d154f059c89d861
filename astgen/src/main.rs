//! `astgen` binary.
//!
//! Usage: `astgen [OPTIONS] <OUTPUT_DIR>`

use astgen::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Wrong argument counts exit here with the usage message and status 2
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let emissions = match cli.run() {
        Ok(emissions) => emissions,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let failed = emissions.iter().filter(|e| e.result.is_err()).count();
    if failed > 0 {
        tracing::error!("{} of {} schema(s) failed", failed, emissions.len());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
