// src/direction.rs

//! Cipher direction, threaded unchanged through substitution and assembly.

use serde::{Deserialize, Serialize};

use crate::consts::SQUARE_SIDE;

/// Whether the pipeline is encrypting or decrypting.
///
/// The two directions share every stage; they differ only in which way
/// same-row and same-column substitutions shift, and in whether assembly
/// strips padding afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Wraparound shift for same-row / same-column substitution.
    ///
    /// Encrypting moves one cell forward; decrypting moves one cell back,
    /// expressed as `SQUARE_SIDE - 1` so the caller can stay in unsigned
    /// modular arithmetic.
    #[inline]
    pub(crate) const fn shift(self) -> usize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => SQUARE_SIDE - 1,
        }
    }
}
