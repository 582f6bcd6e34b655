//! ID number check CLI
//!
//! Usage: idscan_check <NUMBER>...
//!        idscan_check --stdin < numbers.txt
//!
//! Example:
//!   idscan_check 499118665246 "9876 5432 1019"
//!
//! Prints `<number>\t<valid|invalid>` per input. Inputs that are not digit
//! strings are reported on stderr. Exit code is 0 only if every input is valid.

use anyhow::{Context, Result};
use clap::Parser;
use idscan_verhoeff::check_many;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "idscan_check")]
#[command(version, about = "Validate Verhoeff check digits of ID numbers", long_about = None)]
struct Cli {
    /// Numbers to check (whitespace between digits is ignored)
    #[arg(required_unless_present = "stdin")]
    numbers: Vec<String>,

    /// Read numbers from stdin, one per line
    #[arg(long, conflicts_with = "numbers")]
    stdin: bool,
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line.trim().to_string());
        }
    }
    Ok(lines)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let inputs = if cli.stdin {
        read_stdin_lines()?
    } else {
        cli.numbers
    };

    let start = Instant::now();
    let outcomes = check_many(&inputs);
    debug!(
        count = outcomes.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "checked numbers"
    );

    let mut all_valid = true;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(valid) => {
                all_valid &= *valid;
                println!(
                    "{}\t{}",
                    outcome.input,
                    if *valid { "valid" } else { "invalid" }
                );
            }
            Err(e) => {
                all_valid = false;
                eprintln!("Error: '{}': {}", outcome.input, e);
            }
        }
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
