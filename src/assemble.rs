//! # Output Assembly
//!
//! Joins substituted digraphs into the final string. Encryption keeps the
//! concatenation as-is: padding letters are part of the ciphertext and
//! must survive the round trip. Decryption applies a lossy cleanup that
//! strips the padding inserted by segmentation.
//!
//! The cleanup is a heuristic, not an inverse: a padding `X` cannot be
//! told apart from an `X` that was in the original plaintext, so genuine
//! `X` content is removed along with the padding. This matches the
//! historical convention and is deliberately not made "smarter".

use crate::consts::PAD_LETTER;
use crate::digraph::Digraph;
use crate::direction::Direction;

/// Join substituted digraphs into the final output string.
///
/// For [`Direction::Decrypt`] the concatenation is passed through
/// [`strip_padding`]; for [`Direction::Encrypt`] it is returned unchanged.
pub fn assemble(digraphs: &[Digraph], direction: Direction) -> String {
    let mut joined = String::with_capacity(digraphs.len() * 2);
    for d in digraphs {
        joined.push(d.first());
        joined.push(d.second());
    }
    match direction {
        Direction::Encrypt => joined,
        Direction::Decrypt => strip_padding(&joined),
    }
}

/// Best-effort removal of segmentation padding from decrypted text.
///
/// Two passes, kept exactly as the historical convention defines them:
/// every `X` immediately followed by another character is removed, then a
/// single trailing `X` is removed. Applying the cleanup to an already
/// clean string is a no-op.
///
/// ```
/// use playfair_rs::assemble::strip_padding;
///
/// assert_eq!(strip_padding("HELXLO"), "HELLO");
/// assert_eq!(strip_padding("INSTRUMENTSX"), "INSTRUMENTS");
/// assert_eq!(strip_padding("HELLO"), "HELLO");
/// ```
pub fn strip_padding(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == PAD_LETTER && i + 1 < bytes.len() {
            continue;
        }
        out.push(b as char);
    }
    if out.ends_with(PAD_LETTER as char) {
        out.pop();
    }
    out
}
