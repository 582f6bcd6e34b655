//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file operations and the external OCR collaborator.

pub mod image_io;
pub mod recognizer;
#[cfg(feature = "tesseract")]
pub mod tesseract;
