//! Grouped ID number extraction from recognized text
//!
//! Recognizes exactly one layout: three groups of four ASCII digits separated
//! by a single whitespace character (`1234 5678 9012`), not touching a word
//! character (ASCII letter, digit or `_`) on either side. OCR substitutions
//! such as `O` for `0` are not corrected and ungrouped runs are not accepted.

use crate::constants::{GROUP_COUNT, GROUP_LEN, ID_LENGTH};
use crate::domain::digits::DigitSequence;

/// Characters spanned by one grouped match (digits plus separators)
const MATCH_SPAN: usize = ID_LENGTH + GROUP_COUNT - 1; // 14

/// A grouped number found in text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdMatch {
    /// Normalized digits, separators removed
    pub sequence: DigitSequence,
    /// Byte offset of the first digit
    pub start: usize,
    /// Byte offset just past the last digit
    pub end: usize,
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Separator class: ASCII whitespace, Unicode space separators, line and
/// paragraph separators and the byte order mark. U+0085 is not included.
#[inline]
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Try to match the 4-4-4 layout starting at `chars[k]`
fn match_at(chars: &[(usize, char)], k: usize) -> Option<Vec<u8>> {
    if k + MATCH_SPAN > chars.len() {
        return None;
    }
    if k > 0 && is_word_char(chars[k - 1].1) {
        return None;
    }
    if let Some(&(_, after)) = chars.get(k + MATCH_SPAN)
        && is_word_char(after)
    {
        return None;
    }

    let mut digits = Vec::with_capacity(ID_LENGTH);
    for (offset, &(_, c)) in chars[k..k + MATCH_SPAN].iter().enumerate() {
        if offset % (GROUP_LEN + 1) == GROUP_LEN {
            if !is_separator(c) {
                return None;
            }
        } else if c.is_ascii_digit() {
            digits.push(c as u8 - b'0');
        } else {
            return None;
        }
    }
    Some(digits)
}

fn to_match(text: &str, chars: &[(usize, char)], k: usize, digits: Vec<u8>) -> IdMatch {
    let end = chars
        .get(k + MATCH_SPAN)
        .map(|&(pos, _)| pos)
        .unwrap_or(text.len());
    IdMatch {
        sequence: DigitSequence::from_digits_unchecked(digits),
        start: chars[k].0,
        end,
    }
}

/// Find every non-overlapping grouped number, left to right
pub fn find_all(text: &str) -> Vec<IdMatch> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut matches = Vec::new();
    let mut k = 0;

    while k + MATCH_SPAN <= chars.len() {
        match match_at(&chars, k) {
            Some(digits) => {
                matches.push(to_match(text, &chars, k, digits));
                k += MATCH_SPAN;
            }
            None => k += 1,
        }
    }

    matches
}

/// Find the first grouped number in `text`
pub fn find_first(text: &str) -> Option<IdMatch> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    (0..chars.len())
        .find_map(|k| match_at(&chars, k).map(|digits| to_match(text, &chars, k, digits)))
}

/// Extract the first grouped ID number as a contiguous 12-digit sequence
///
/// Returns `None` when the text holds no such number.
pub fn extract(text: &str) -> Option<DigitSequence> {
    find_first(text).map(|m| m.sequence)
}

/// Extract every grouped ID number in the text
pub fn extract_all(text: &str) -> Vec<DigitSequence> {
    find_all(text).into_iter().map(|m| m.sequence).collect()
}
