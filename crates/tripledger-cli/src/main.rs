//! Tripledger - truck trip and slip tracking with profitability analysis
//!
//! A CLI ledger for trips, field-captured slips, and per-trip profit.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
