//! # Pair Segmentation
//!
//! Splits normalized text into the digraph sequence the substitution stage
//! consumes. Segmentation is independent of the key square: the same text
//! always yields the same pairs regardless of keyword.

use crate::consts::PAD_LETTER;
use crate::digraph::Digraph;
use crate::utils::normalize;

/// Segment text into cipher digraphs.
///
/// The text is normalized (uppercase, `J` to `I`, non-letters stripped),
/// then scanned left to right:
///
/// - a final unpaired letter is completed with the padding letter `X`;
/// - two equal adjacent letters are split by emitting `(letter, X)` and
///   re-visiting the second letter as the start of the next pair;
/// - otherwise the two letters form a pair.
///
/// Empty or entirely non-alphabetic text yields an empty sequence. Note
/// that a lone trailing `X` pads to the equal pair `XX`; on decryption the
/// inserted padding cannot be distinguished from original text (see
/// [`crate::assemble`]).
///
/// ```
/// use playfair_rs::segment;
///
/// let pairs: Vec<String> = segment("HELLO").iter().map(|d| d.to_string()).collect();
/// assert_eq!(pairs, ["HE", "LX", "LO"]);
/// ```
pub fn segment(text: &str) -> Vec<Digraph> {
    let letters = normalize(text).into_bytes();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        if i + 1 == letters.len() {
            pairs.push(Digraph::from_bytes(a, PAD_LETTER));
            break;
        }
        let b = letters[i + 1];
        if a == b {
            pairs.push(Digraph::from_bytes(a, PAD_LETTER));
            i += 1;
        } else {
            pairs.push(Digraph::from_bytes(a, b));
            i += 2;
        }
    }

    pairs
}
