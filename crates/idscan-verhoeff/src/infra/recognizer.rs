//! Text recognition seam
//!
//! The OCR engine is an external collaborator. Anything that can turn image
//! bytes into text implements [`TextRecognizer`].

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failures of the OCR collaborator
///
/// Always distinct from "no ID number in the text", which is not an error of
/// the recognizer.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The OCR program could not be started
    #[error("failed to start OCR program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The OCR program exited unsuccessfully
    #[error("OCR program exited with {}: {stderr}", describe_status(.status))]
    Failed { status: Option<i32>, stderr: String },
    /// Recognition did not finish in time
    #[error("OCR timed out after {0:?}")]
    Timeout(Duration),
    /// Piping data to or from the OCR program failed
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The recognized text was not valid UTF-8
    #[error("OCR output is not valid UTF-8: {0}")]
    Undecodable(#[source] std::string::FromUtf8Error),
    /// Any other backend-specific failure
    #[error("OCR backend error: {0}")]
    Backend(String),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}

/// Converts an image into recognized text
pub trait TextRecognizer {
    /// Recognize all text in `image` (raw encoded image bytes)
    fn recognize(
        &self,
        image: &[u8],
    ) -> impl Future<Output = Result<String, RecognitionError>> + Send;
}
