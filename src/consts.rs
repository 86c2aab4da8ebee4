//! # Constants
//!
//! Fixed parameters of the cipher: the 25-letter alphabet, the square
//! dimensions, and the padding letter.

/// Side length of the key square.
pub const SQUARE_SIDE: usize = 5;

/// Total number of cells in the key square.
///
/// Always `SQUARE_SIDE * SQUARE_SIDE`; kept as its own constant because it
/// is also the length of [`ALPHABET`].
pub const SQUARE_LEN: usize = SQUARE_SIDE * SQUARE_SIDE;

/// The cipher alphabet: `A`–`Z` with `J` removed.
///
/// `J` is folded into `I` during normalization so that 26 letters fit a
/// 25-cell square. The order here is the fill order used for key square
/// cells not claimed by the keyword.
pub const ALPHABET: [u8; SQUARE_LEN] = *b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Padding letter inserted by segmentation.
///
/// Used to complete an odd-length text and to separate the two letters of
/// an adjacent duplicate pair. Removal on decryption is a lossy heuristic;
/// see [`crate::assemble`].
pub const PAD_LETTER: u8 = b'X';

/// The letter dropped from the alphabet; normalization maps it to `I`.
pub const FOLDED_LETTER: u8 = b'J';
