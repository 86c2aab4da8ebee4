// src/decryptor.rs

//! High-level decryption facade.

use crate::direction::Direction;
use crate::key_square::KeySquare;
use crate::result::CipherResult;

/// Decrypt ciphertext under a keyword.
///
/// Derives the key square, runs the pipeline in reverse direction, and
/// applies the lossy padding cleanup to the assembled text (see
/// [`crate::assemble::strip_padding`]).
///
/// ```
/// use playfair_rs::decrypt;
///
/// assert_eq!(decrypt("PLAYFAIR", "KGYVRV").text, "HELLO");
/// ```
pub fn decrypt(keyword: &str, ciphertext: &str) -> CipherResult {
    decrypt_with_square(&KeySquare::derive(keyword), ciphertext)
}

/// Decrypt ciphertext against an already derived key square.
pub fn decrypt_with_square(square: &KeySquare, ciphertext: &str) -> CipherResult {
    CipherResult::compute(square, ciphertext, Direction::Decrypt)
}
