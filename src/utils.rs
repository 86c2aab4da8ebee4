// src/utils.rs

//! Text normalization shared by key derivation and segmentation.

use crate::consts::FOLDED_LETTER;

/// Folds a single character into the cipher alphabet.
///
/// Uppercases ASCII letters and maps `J` to `I`. Returns `None` for
/// anything that is not an ASCII letter, which normalization silently
/// drops.
#[inline]
pub fn fold_letter(c: char) -> Option<u8> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let b = c.to_ascii_uppercase() as u8;
    Some(if b == FOLDED_LETTER { b'I' } else { b })
}

/// Normalizes arbitrary text into cipher-alphabet letters.
///
/// Uppercase, `J` folded to `I`, every non-letter stripped. Total over any
/// input string; an entirely non-alphabetic input yields the empty string.
///
/// ```
/// use playfair_rs::utils::normalize;
///
/// assert_eq!(normalize("Jack & Jill!"), "IACKIILL");
/// assert_eq!(normalize("1234 ..."), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter_map(fold_letter)
        .map(char::from)
        .collect()
}
