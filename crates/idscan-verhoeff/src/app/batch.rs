//! Batch validation of typed-in numbers
//!
//! Each input is independent, so with the `parallel` feature the checks are
//! spread over the rayon thread pool. Output order always matches input order.

use crate::domain::digits::{DigitError, DigitSequence};
use crate::domain::verhoeff::validate;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of checking one input string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Input as given
    pub input: String,
    /// `Ok(valid)` for digit input, `Err` for anything that is not a number
    pub result: Result<bool, DigitError>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self.result, Ok(true))
    }
}

/// Check a single number, ignoring whitespace between digits
pub fn check_one(input: &str) -> CheckOutcome {
    let result = DigitSequence::parse_lenient(input).map(|seq| validate(&seq));
    CheckOutcome {
        input: input.to_string(),
        result,
    }
}

/// Check many numbers, preserving input order
#[cfg(feature = "parallel")]
pub fn check_many<S>(inputs: &[S]) -> Vec<CheckOutcome>
where
    S: AsRef<str> + Sync,
{
    inputs.par_iter().map(|s| check_one(s.as_ref())).collect()
}

/// Check many numbers, preserving input order
#[cfg(not(feature = "parallel"))]
pub fn check_many<S>(inputs: &[S]) -> Vec<CheckOutcome>
where
    S: AsRef<str> + Sync,
{
    inputs.iter().map(|s| check_one(s.as_ref())).collect()
}
