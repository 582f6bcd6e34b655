//! Verhoeff checksum engine
//!
//! Validation walks the sequence from the check digit (reversed position 0)
//! towards the most significant digit:
//!
//! ```text
//! c = 0
//! for (i, d) in reversed(digits): c = D[c][P[i % 8][d]]
//! valid <=> c == 0
//! ```
//!
//! Generation runs the same walk over the payload shifted by one position
//! (the check digit will take position 0) and returns `inv[c]`.

use crate::constants::{PERMUTATION_CYCLE, VERHOEFF_D, VERHOEFF_INV, VERHOEFF_P};
use crate::domain::digits::{DigitError, DigitSequence};

/// Fold digits (most significant first) into the Verhoeff accumulator
///
/// `offset` is the reversed position of the last digit: 0 when the check
/// digit is included, 1 when computing a check digit for a payload.
#[inline]
fn accumulate(digits: &[u8], offset: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &d)| {
            let permuted = VERHOEFF_P[(i + offset) % PERMUTATION_CYCLE][d as usize];
            VERHOEFF_D[c as usize][permuted as usize]
        })
}

/// Final accumulator for a full sequence (0 means valid)
pub fn checksum(sequence: &DigitSequence) -> u8 {
    accumulate(sequence.as_slice(), 0)
}

/// Check whether the trailing check digit of `sequence` is correct
pub fn validate(sequence: &DigitSequence) -> bool {
    checksum(sequence) == 0
}

/// Parse `s` as digits and validate it
///
/// Non-digit input is rejected with [`DigitError`] before any table lookup.
pub fn validate_str(s: &str) -> Result<bool, DigitError> {
    let sequence = DigitSequence::parse(s)?;
    Ok(validate(&sequence))
}

/// Compute the check digit to append to `payload`
pub fn generate_check_digit(payload: &DigitSequence) -> u8 {
    VERHOEFF_INV[accumulate(payload.as_slice(), 1) as usize]
}

/// Return `payload` followed by its check digit
pub fn append_check_digit(payload: &DigitSequence) -> DigitSequence {
    let mut digits = Vec::with_capacity(payload.len() + 1);
    digits.extend_from_slice(payload.as_slice());
    digits.push(generate_check_digit(payload));
    DigitSequence::from_digits_unchecked(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> DigitSequence {
        DigitSequence::parse(s).unwrap()
    }

    // =========================================================================
    // Table properties
    // =========================================================================

    fn is_permutation(values: impl Iterator<Item = u8>) -> bool {
        let mut seen = [false; 10];
        for v in values {
            if v > 9 || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn test_d_is_latin_square() {
        for r in 0..10 {
            assert!(is_permutation(VERHOEFF_D[r].iter().copied()), "row {}", r);
        }
        for col in 0..10 {
            assert!(
                is_permutation((0..10).map(|r| VERHOEFF_D[r][col])),
                "column {}",
                col
            );
        }
    }

    #[test]
    fn test_d_identity_is_zero() {
        for a in 0..10u8 {
            assert_eq!(VERHOEFF_D[0][a as usize], a);
            assert_eq!(VERHOEFF_D[a as usize][0], a);
        }
    }

    #[test]
    fn test_d_is_not_commutative() {
        assert_ne!(VERHOEFF_D[1][5], VERHOEFF_D[5][1]);
    }

    #[test]
    fn test_p_rows_are_permutations() {
        for (i, row) in VERHOEFF_P.iter().enumerate() {
            assert!(is_permutation(row.iter().copied()), "P row {}", i);
        }
    }

    #[test]
    fn test_p_rows_follow_base_permutation() {
        // Each row is the previous one composed with row 1
        for i in 1..PERMUTATION_CYCLE {
            for d in 0..10 {
                let prev = VERHOEFF_P[i - 1][d] as usize;
                assert_eq!(VERHOEFF_P[i][d], VERHOEFF_P[1][prev], "row {} digit {}", i, d);
            }
        }
    }

    #[test]
    fn test_inv_is_inverse() {
        for a in 0..10 {
            let inv = VERHOEFF_INV[a] as usize;
            assert_eq!(VERHOEFF_D[a][inv], 0, "a={}", a);
            assert_eq!(VERHOEFF_D[inv][a], 0, "a={}", a);
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_validate_known_numbers() {
        assert!(validate(&seq("2363")));
        assert!(validate(&seq("123451")));
        assert!(validate(&seq("123456789010")));
        assert!(validate(&seq("499118665246")));
        assert!(validate(&seq("0")));
    }

    #[test]
    fn test_validate_rejects_wrong_check_digit() {
        assert!(!validate(&seq("2364")));
        assert!(!validate(&seq("123456789012")));
        assert!(!validate(&seq("1")));
    }

    #[test]
    fn test_checksum_value() {
        assert_eq!(checksum(&seq("2363")), 0);
        assert_eq!(checksum(&seq("987654321019")), 6);
        assert_eq!(checksum(&seq("123456789012")), 2);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let s = seq("499118665246");
        let first = validate(&s);
        let second = validate(&s);
        assert_eq!(first, second);
        assert_eq!(s.to_string(), "499118665246");
    }

    #[test]
    fn test_validate_str() {
        assert_eq!(validate_str("2363"), Ok(true));
        assert_eq!(validate_str("2364"), Ok(false));
        assert!(matches!(
            validate_str("23a3"),
            Err(DigitError::InvalidCharacter { ch: 'a', position: 2 })
        ));
        assert_eq!(validate_str(""), Err(DigitError::Empty));
    }

    // =========================================================================
    // Generation
    // =========================================================================

    #[test]
    fn test_generate_known_check_digits() {
        assert_eq!(generate_check_digit(&seq("236")), 3);
        assert_eq!(generate_check_digit(&seq("12345")), 1);
        assert_eq!(generate_check_digit(&seq("75872")), 2);
        assert_eq!(generate_check_digit(&seq("12345678901")), 0);
        assert_eq!(generate_check_digit(&seq("98765432101")), 2);
    }

    #[test]
    fn test_append_check_digit() {
        let full = append_check_digit(&seq("49911866524"));
        assert_eq!(full.to_string(), "499118665246");
        assert!(validate(&full));
    }

    #[test]
    fn test_generate_validate_round_trip_short_payloads() {
        for n in 0..1000u32 {
            let payload = seq(&n.to_string());
            let full = append_check_digit(&payload);
            assert!(validate(&full), "payload {}", n);
        }
    }

    // =========================================================================
    // Error detection
    // =========================================================================

    #[test]
    fn test_single_digit_errors_detected() {
        let reference = seq("987654321012");
        assert!(validate(&reference));

        let mut undetected = Vec::new();
        for pos in 0..reference.len() {
            for v in 0..10u8 {
                if reference.as_slice()[pos] == v {
                    continue;
                }
                let mut digits = reference.as_slice().to_vec();
                digits[pos] = v;
                let altered = DigitSequence::from_digits(digits).unwrap();
                if validate(&altered) {
                    undetected.push((pos, v));
                }
            }
        }
        assert!(undetected.is_empty(), "undetected: {:?}", undetected);
    }

    #[test]
    fn test_adjacent_transpositions_detected() {
        for number in ["987654321012", "499118665246", "123456789010"] {
            let reference = seq(number);
            assert!(validate(&reference));
            for pos in 0..reference.len() - 1 {
                let mut digits = reference.as_slice().to_vec();
                if digits[pos] == digits[pos + 1] {
                    continue;
                }
                digits.swap(pos, pos + 1);
                let swapped = DigitSequence::from_digits(digits).unwrap();
                assert!(!validate(&swapped), "{} swap at {}", number, pos);
            }
        }
    }

    #[test]
    fn test_permutation_has_order_eight() {
        // One more step after row 7 returns to the identity row
        for d in 0..10 {
            let wrapped = VERHOEFF_P[1][VERHOEFF_P[PERMUTATION_CYCLE - 1][d] as usize];
            assert_eq!(wrapped, VERHOEFF_P[0][d]);
        }
        // ...and no earlier row is the identity
        for row in &VERHOEFF_P[1..] {
            assert_ne!(row, &VERHOEFF_P[0]);
        }
    }
}
