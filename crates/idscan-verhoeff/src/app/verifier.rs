//! Scan workflow implementation
//!
//! Image bytes -> OCR text -> grouped ID number -> Verhoeff verdict.
//! Only the recognizer call is asynchronous; extraction and validation run
//! synchronously on the recognized text.

use crate::constants::{
    MISSING_INPUT_MESSAGE, NOT_FOUND_MESSAGE, RECOGNITION_FAILED_MESSAGE,
};
use crate::domain::digits::DigitSequence;
use crate::domain::extract::find_all;
use crate::domain::verhoeff::checksum;
use crate::infra::image_io::{ImageError, ImageFormat, read_image};
use crate::infra::recognizer::{RecognitionError, TextRecognizer};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Why a scan produced no verdict
#[derive(Debug, Error)]
pub enum VerifyError {
    /// No image (or an empty one) was supplied; the core never ran
    #[error("no image supplied")]
    MissingInput,
    /// The image exists but could not be read
    #[error(transparent)]
    Unreadable(ImageError),
    /// The recognized text held no grouped ID number
    #[error("no grouped ID number found in recognized text")]
    NotFound,
    /// The OCR collaborator failed
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}

impl VerifyError {
    /// User-facing message for the error body
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingInput => MISSING_INPUT_MESSAGE,
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::Unreadable(_) | Self::Recognition(_) => RECOGNITION_FAILED_MESSAGE,
        }
    }

    /// Process exit code for CLI tools
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput => 1,
            Self::NotFound => 2,
            Self::Unreadable(_) | Self::Recognition(_) => 3,
        }
    }
}

/// Outcome of a successful scan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationReport {
    /// Extracted 12-digit number
    pub id_number: DigitSequence,
    /// Whether the check digit is correct
    pub valid: bool,
    /// Final Verhoeff accumulator (0 when valid)
    pub checksum: u8,
}

impl VerificationReport {
    pub fn for_sequence(id_number: DigitSequence) -> Self {
        let checksum = checksum(&id_number);
        Self {
            id_number,
            valid: checksum == 0,
            checksum,
        }
    }
}

/// Extract and validate the first grouped ID number in `text`
pub fn verify_text(text: &str) -> Result<VerificationReport, VerifyError> {
    let candidates = find_all(text);
    if candidates.len() > 1 {
        debug!(
            count = candidates.len(),
            "multiple grouped numbers in text, using the first"
        );
    }

    let first = candidates.into_iter().next().ok_or(VerifyError::NotFound)?;
    let report = VerificationReport::for_sequence(first.sequence);
    debug!(
        id_number = %report.id_number,
        checksum = report.checksum,
        valid = report.valid,
        "validated ID number"
    );
    Ok(report)
}

/// Run OCR on `image` and verify the recognized text
///
/// `None` or an empty payload is rejected with [`VerifyError::MissingInput`]
/// before the recognizer is called.
pub async fn verify_image<R>(
    recognizer: &R,
    image: Option<&[u8]>,
) -> Result<VerificationReport, VerifyError>
where
    R: TextRecognizer + Sync,
{
    let image = match image {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(VerifyError::MissingInput),
    };

    match ImageFormat::detect(image) {
        Some(format) => debug!(?format, bytes = image.len(), "received image"),
        None => warn!(bytes = image.len(), "unrecognized image format, passing to OCR as-is"),
    }

    let text = recognizer.recognize(image).await.map_err(|e| {
        warn!(error = %e, "text recognition failed");
        VerifyError::Recognition(e)
    })?;

    verify_text(&text)
}

/// Read the image at `path` and verify it
///
/// A missing or empty file is [`VerifyError::MissingInput`]; any other read
/// failure is [`VerifyError::Unreadable`].
pub async fn verify_image_file<R>(
    recognizer: &R,
    path: &Path,
) -> Result<VerificationReport, VerifyError>
where
    R: TextRecognizer + Sync,
{
    let image = match read_image(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.is_missing_input() => {
            warn!(path = %path.display(), error = %e, "no image to scan");
            None
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read image");
            return Err(VerifyError::Unreadable(e));
        }
    };
    verify_image(recognizer, image.as_deref()).await
}
