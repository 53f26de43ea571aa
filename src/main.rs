//! flipkart-scraper binary.
//!
//! Prints exactly one JSON document on stdout; diagnostics go to stderr.

use std::process::ExitCode;

use clap::Parser;

use flipkart_scraper::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let report = cli::run(cli).await;

    println!("{}", report.result.to_json());
    ExitCode::from(report.exit_code)
}
