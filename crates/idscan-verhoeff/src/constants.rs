//! Verhoeff tables and ID number layout constants
//!
//! All tables are process-wide read-only statics and are never mutated.

// =============================================================================
// Verhoeff tables
// =============================================================================

/// Multiplication table of the dihedral group D5
///
/// `VERHOEFF_D[a][b]` combines accumulator `a` with a permuted digit `b`.
/// Every row and every column is a permutation of 0-9.
pub static VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation table
///
/// Row `i` is the permutation applied to the digit at reversed position `i`,
/// taken modulo [`PERMUTATION_CYCLE`].
pub static VERHOEFF_P: [[u8; 10]; PERMUTATION_CYCLE] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse of each element under [`VERHOEFF_D`] (only used for generation)
pub static VERHOEFF_INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Cycle length of the permutation table (8, not 10)
pub const PERMUTATION_CYCLE: usize = 8;

// =============================================================================
// ID number layout
// =============================================================================

/// Digits per group in the printed form (`1234 5678 9012`)
pub const GROUP_LEN: usize = 4;

/// Number of groups in the printed form
pub const GROUP_COUNT: usize = 3;

/// Total digits of an ID number, check digit included
pub const ID_LENGTH: usize = GROUP_LEN * GROUP_COUNT; // 12

// =============================================================================
// Response messages
// =============================================================================

/// Human-readable verdict for a sequence that passes the checksum
pub const VALID_MESSAGE: &str = "Valid ID number";

/// Human-readable verdict for a sequence that fails the checksum
pub const INVALID_MESSAGE: &str = "Invalid or fake ID number";

/// Error body when no image was supplied
pub const MISSING_INPUT_MESSAGE: &str = "No file uploaded";

/// Error body when no grouped number was found in the recognized text
pub const NOT_FOUND_MESSAGE: &str = "ID number not found in the image";

/// Error body when the OCR engine failed
pub const RECOGNITION_FAILED_MESSAGE: &str = "Failed to process ID card image";
