//! JSON response bodies
//!
//! Success: `{"idNumber": "123456789012", "valid": "Valid ID number"}`
//! Failure: `{"error": "ID number not found in the image"}`

use crate::app::verifier::{VerificationReport, VerifyError};
use crate::constants::{INVALID_MESSAGE, VALID_MESSAGE};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanResponse {
    Success {
        #[serde(rename = "idNumber")]
        id_number: String,
        valid: &'static str,
    },
    Error {
        error: &'static str,
    },
}

impl ScanResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<&VerificationReport> for ScanResponse {
    fn from(report: &VerificationReport) -> Self {
        Self::Success {
            id_number: report.id_number.to_string(),
            valid: if report.valid {
                VALID_MESSAGE
            } else {
                INVALID_MESSAGE
            },
        }
    }
}

impl From<&VerifyError> for ScanResponse {
    fn from(err: &VerifyError) -> Self {
        Self::Error {
            error: err.message(),
        }
    }
}

impl From<&Result<VerificationReport, VerifyError>> for ScanResponse {
    fn from(result: &Result<VerificationReport, VerifyError>) -> Self {
        match result {
            Ok(report) => report.into(),
            Err(err) => err.into(),
        }
    }
}
