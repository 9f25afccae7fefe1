//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Human-friendly output formatting

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use weather_core::WeatherError;

mod ansi;
mod cli;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);

    tokio::select! {
        result = cmd.run() => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}{}{}", ansi::RED, error_message(&err), ansi::RESET);
                ExitCode::FAILURE
            }
        },
        // an Err here means no handler could be installed; the branch is then disabled
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\nExiting...");
            ExitCode::SUCCESS
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, raised by each `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The line shown for a failed run, without color codes.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WeatherError>() {
        Some(e) if e.is_data_fetch() => format!("Error fetching weather data: {e}"),
        Some(e) => format!("Error: {e}"),
        None => format!("Error: {err:#}"),
    }
}
