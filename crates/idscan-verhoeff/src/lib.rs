//! idscan-verhoeff - ID number extraction and Verhoeff check digit validation
//!
//! This crate provides functionality to:
//! - Find a grouped 12-digit ID number (`1234 5678 9012`) in OCR text
//! - Validate and generate Verhoeff check digits
//! - Run an image through an external OCR engine and report the verdict

pub mod app;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::batch::{CheckOutcome, check_many, check_one};
pub use app::response::ScanResponse;
pub use app::verifier::{
    VerificationReport, VerifyError, verify_image, verify_image_file, verify_text,
};
pub use config::{ConfigError, RecognizerConfig};
pub use domain::digits::{DigitError, DigitSequence};
pub use domain::extract::{extract, extract_all};
pub use domain::verhoeff::{append_check_digit, checksum, generate_check_digit, validate, validate_str};
pub use infra::recognizer::{RecognitionError, TextRecognizer};

#[cfg(feature = "tesseract")]
pub use infra::tesseract::TesseractRecognizer;
