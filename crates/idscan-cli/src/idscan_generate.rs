//! Check digit generation CLI
//!
//! Usage: idscan_generate <PAYLOAD>
//! Example: idscan_generate 49911866524   ->   499118665246

use clap::Parser;
use idscan_verhoeff::{DigitSequence, append_check_digit};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "idscan_generate")]
#[command(version, about = "Append a Verhoeff check digit to a number", long_about = None)]
struct Cli {
    /// Digits without the check digit (whitespace is ignored)
    payload: String,

    /// Print only the check digit
    #[arg(long)]
    digit_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let payload = match DigitSequence::parse_lenient(&cli.payload) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: invalid payload '{}': {}", cli.payload, e);
            return ExitCode::FAILURE;
        }
    };

    let full = append_check_digit(&payload);
    if cli.digit_only {
        println!("{}", full.last());
    } else {
        println!("{}", full);
    }
    ExitCode::SUCCESS
}
