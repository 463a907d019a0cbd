//! # Groundwork CLI
//!
//! Terminal front end for the bid estimator. Reads measurements either from a
//! JSON request file or from interactive prompts, prices the bid with
//! `bid_core`, and prints a bid summary, operational handoff, and JSON report.
//!
//! ## Usage
//!
//! ```text
//! bid_cli                                  # interactive prompts
//! bid_cli --request job.json               # price a saved request
//! bid_cli --request job.json --json        # JSON report only
//! bid_cli --rates rates.json               # override rates (partial file allowed)
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

mod input;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use report::BidReport;

/// Exit code when the measurements do not describe an estimable job
const EXIT_NOT_COMPUTABLE: u8 = 2;

/// Retaining wall and concrete slab bid estimator
#[derive(Parser)]
#[command(name = "bid_cli")]
#[command(about = "Retaining wall and concrete slab bid estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON bid request to price (prompts for measurements when omitted)
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// JSON rate configuration; replaces the request's rates
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Print only the JSON report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut request = match &cli.request {
        Some(path) => input::load_request(path)?,
        None => input::prompt_request(),
    };

    if let Some(path) = &cli.rates {
        request.rates = input::load_rates(path)?;
    }

    tracing::info!(label = %request.label, "pricing bid");

    match request.estimate() {
        Ok(result) => {
            let report = BidReport::new(&request, result);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_summary(&report);
                println!();
                println!("JSON Output (for API use):");
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_not_computable() => {
            // No figures are printed for a job that cannot be priced.
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&err)?);
            } else {
                eprintln!("Bid not computable: {}", err);
                eprintln!("Enter a slab area and thickness greater than zero.");
            }
            Ok(ExitCode::from(EXIT_NOT_COMPUTABLE))
        }
        Err(err) => Err(err.into()),
    }
}
