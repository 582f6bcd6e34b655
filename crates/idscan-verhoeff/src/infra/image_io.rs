//! Image payload loading
//!
//! Reads image files for the recognizer and sniffs their container format
//! from magic bytes. Decoding is left to the OCR engine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    /// The path does not exist
    #[error("image file not found: {0}")]
    NotFound(PathBuf),
    /// The file exists but holds no bytes
    #[error("image file is empty: {0}")]
    Empty(PathBuf),
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageError {
    /// True when the error means "no image was supplied"
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Empty(_))
    }
}

/// Image container formats recognized by magic bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
    Pnm,
}

impl ImageFormat {
    /// Detect the container format from the leading bytes
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(Self::Gif),
            [b'B', b'M', ..] => Some(Self::Bmp),
            [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some(Self::Tiff),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::WebP),
            [b'P', b'1'..=b'6', ..] => Some(Self::Pnm),
            _ => None,
        }
    }
}

/// Read an image file into memory
///
/// A missing or empty file is reported as such so callers can treat it as
/// "no image supplied" rather than an I/O failure.
pub fn read_image(path: impl AsRef<Path>) -> Result<Vec<u8>, ImageError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ImageError::NotFound(path.to_path_buf()),
        _ => ImageError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if bytes.is_empty() {
        return Err(ImageError::Empty(path.to_path_buf()));
    }

    Ok(bytes)
}
