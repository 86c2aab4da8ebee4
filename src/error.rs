//! # Error Types
//!
//! This module defines the error type used by the validating construction
//! surfaces. The cipher pipeline itself is infallible: normalization is
//! total over arbitrary strings and square lookups cannot miss, so errors
//! only arise when building values from untrusted external representations
//! (explicit square rows, parsed digraphs, deserialized data).

use thiserror::Error;

/// The error type for Playfair construction and parsing operations.
#[derive(Error, Debug)]
pub enum PlayfairError {
    /// A key square representation failed validation.
    ///
    /// Returned when explicit rows (or a deserialized square) do not form
    /// a bijection over the 25-letter alphabet: wrong row/column counts,
    /// duplicate letters, or letters outside the alphabet.
    #[error("Invalid key square: {0}")]
    InvalidSquare(String),

    /// A character outside the cipher alphabet where a letter is required.
    ///
    /// Normalization folds `j`/`J` to `I` and uppercases freely, so this
    /// is only returned for non-alphabetic characters.
    #[error("Unsupported letter: {0:?}")]
    UnsupportedLetter(char),

    /// A string that should encode exactly two letters did not.
    #[error("Invalid digraph: {0:?} (expected exactly two letters)")]
    InvalidDigraph(String),
}
