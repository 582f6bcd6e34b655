//! Digit sequence type
//!
//! A `DigitSequence` is the only value passed between the extractor and the
//! checksum engine. Its constructors reject anything that is not a decimal
//! digit, so the engine's table lookups are always in bounds.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing a [`DigitSequence`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    /// The input contained no digits
    #[error("digit sequence must not be empty")]
    Empty,
    /// A non-digit character was found
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    /// A raw digit value outside 0-9 was supplied
    #[error("digit value {value} at position {position} is out of range (0-9)")]
    DigitOutOfRange { value: u8, position: usize },
}

/// Ordered, non-empty sequence of decimal digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// Build from raw digit values (each 0-9)
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, DigitError> {
        if digits.is_empty() {
            return Err(DigitError::Empty);
        }
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(DigitError::DigitOutOfRange { value, position });
        }
        Ok(Self { digits })
    }

    /// Parse a string of ASCII digits
    ///
    /// Whitespace is not stripped here; use [`DigitSequence::parse_lenient`]
    /// for user-typed numbers such as `"1234 5678 9012"`.
    pub fn parse(s: &str) -> Result<Self, DigitError> {
        let mut digits = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(DigitError::InvalidCharacter { ch, position }),
            }
        }
        if digits.is_empty() {
            return Err(DigitError::Empty);
        }
        Ok(Self { digits })
    }

    /// Parse digits, skipping any whitespace between them
    pub fn parse_lenient(s: &str) -> Result<Self, DigitError> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Self::parse(&compact)
    }

    /// Build from values already known to be 0-9
    pub(crate) fn from_digits_unchecked(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty() && digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// Digit values, most significant first
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for an empty sequence
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Last digit (the check digit when the sequence is a full number)
    pub fn last(&self) -> u8 {
        // Non-empty by construction
        self.digits[self.digits.len() - 1]
    }

    /// Return a new sequence with `check_digit` appended
    pub fn with_check_digit(&self, check_digit: u8) -> Result<Self, DigitError> {
        if check_digit > 9 {
            return Err(DigitError::DigitOutOfRange {
                value: check_digit,
                position: self.digits.len(),
            });
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.extend_from_slice(&self.digits);
        digits.push(check_digit);
        Ok(Self { digits })
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for DigitSequence {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
