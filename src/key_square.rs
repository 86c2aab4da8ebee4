//! # Key Square
//!
//! Derives and represents the 5x5 letter square every substitution runs
//! against. The square is a bijection over the 25-letter alphabet: each
//! letter occupies exactly one cell. Alongside the cells a 26-entry
//! letter-to-position table is filled once at construction, so position
//! lookups during substitution are O(1) instead of a 25-cell scan.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::consts::{ALPHABET, FOLDED_LETTER, SQUARE_LEN, SQUARE_SIDE};
use crate::error::PlayfairError;
use crate::utils::normalize;

/// The 5x5 key square derived from a keyword.
///
/// Immutable after construction. Derivation is total: any string is a
/// valid keyword, including the empty string (which yields the plain
/// alphabet square).
///
/// ```
/// use playfair_rs::KeySquare;
///
/// let square = KeySquare::derive("PLAYFAIR");
/// assert_eq!(square.row_string(0), "PLAYF");
/// assert_eq!(square.position('R'), Some((1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[u8; SQUARE_SIDE]; SQUARE_SIDE],
    // Indexed by letter minus 'A'; the 'J' slot mirrors 'I'.
    positions: [(u8, u8); 26],
}

impl KeySquare {
    /// Derive the key square for a keyword.
    ///
    /// The keyword is normalized (uppercase, `J` to `I`, non-letters
    /// stripped) and deduplicated keeping first occurrences, then placed
    /// left to right, top to bottom. Remaining alphabet letters follow in
    /// alphabet order.
    pub fn derive(keyword: &str) -> Self {
        let mut order = [0u8; SQUARE_LEN];
        let mut filled = 0;
        let mut seen = [false; 26];

        for b in normalize(keyword).bytes() {
            let slot = (b - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                order[filled] = b;
                filled += 1;
            }
        }
        for &b in ALPHABET.iter() {
            let slot = (b - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                order[filled] = b;
                filled += 1;
            }
        }
        debug_assert_eq!(filled, SQUARE_LEN);

        Self::from_order(order)
    }

    /// Build a key square from explicit rows, validating the bijection.
    ///
    /// Lowercase letters are accepted and uppercased. `J` is rejected
    /// rather than folded: an explicit square that spells out `J` is
    /// malformed, not sloppy input.
    ///
    /// # Errors
    ///
    /// [`PlayfairError::InvalidSquare`] if any cell is not a letter, is
    /// `J`, or repeats a letter already placed.
    pub fn from_rows(rows: &[[char; SQUARE_SIDE]; SQUARE_SIDE]) -> Result<Self, PlayfairError> {
        let mut order = [0u8; SQUARE_LEN];
        let mut seen = [false; 26];

        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(PlayfairError::InvalidSquare(format!(
                        "cell ({r}, {c}) is not a letter: {ch:?}"
                    )));
                }
                let b = ch.to_ascii_uppercase() as u8;
                if b == FOLDED_LETTER {
                    return Err(PlayfairError::InvalidSquare(format!(
                        "cell ({r}, {c}) is J, which the alphabet folds into I"
                    )));
                }
                let slot = (b - b'A') as usize;
                if seen[slot] {
                    return Err(PlayfairError::InvalidSquare(format!(
                        "duplicate letter {} at cell ({r}, {c})",
                        b as char
                    )));
                }
                seen[slot] = true;
                order[r * SQUARE_SIDE + c] = b;
            }
        }

        Ok(Self::from_order(order))
    }

    /// Shared constructor: 25 distinct alphabet letters in row-major order.
    fn from_order(order: [u8; SQUARE_LEN]) -> Self {
        let mut cells = [[0u8; SQUARE_SIDE]; SQUARE_SIDE];
        let mut positions = [(0u8, 0u8); 26];
        for (i, &b) in order.iter().enumerate() {
            let (r, c) = (i / SQUARE_SIDE, i % SQUARE_SIDE);
            cells[r][c] = b;
            positions[(b - b'A') as usize] = (r as u8, c as u8);
        }
        positions[(FOLDED_LETTER - b'A') as usize] = positions[(b'I' - b'A') as usize];
        Self { cells, positions }
    }

    /// The letter at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..5`.
    pub fn cell(&self, row: usize, col: usize) -> char {
        self.cells[row][col] as char
    }

    /// Position of a letter in the square, if it is a letter at all.
    ///
    /// Case-insensitive; `j`/`J` reports the position of `I`. Non-letters
    /// return `None`. Presentation layers use this to highlight the two
    /// cells a digraph touches.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        crate::utils::fold_letter(letter).map(|b| self.pos(b))
    }

    /// Row `r` rendered as a 5-letter string.
    pub fn row_string(&self, r: usize) -> String {
        self.cells[r].iter().map(|&b| b as char).collect()
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flatten().map(|&b| b as char)
    }

    /// Infallible byte-level lookup. Callers guarantee `b` is an alphabet
    /// letter (or `J`, which shares the `I` cell).
    #[inline]
    pub(crate) fn pos(&self, b: u8) -> (usize, usize) {
        debug_assert!(b.is_ascii_uppercase());
        let (r, c) = self.positions[(b - b'A') as usize];
        (r as usize, c as usize)
    }

    /// Infallible byte-level cell access with wrapped coordinates applied
    /// by the caller.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }
}

#[cfg(feature = "rand")]
impl KeySquare {
    /// A uniformly random key square from the thread-local generator.
    ///
    /// Shuffles the alphabet into the 25 cells. Useful for generating
    /// exercise keys; irrelevant to security, which this cipher does not
    /// provide.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// A uniformly random key square from a caller-supplied generator.
    pub fn random_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        use rand::seq::SliceRandom;

        let mut order = ALPHABET;
        order.shuffle(rng);
        Self::from_order(order)
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &b) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", b as char)?;
            }
        }
        Ok(())
    }
}

impl FromStr for KeySquare {
    type Err = PlayfairError;

    /// Parses a 25-letter row-major string (whitespace ignored) as an
    /// explicit square, validating the bijection like [`Self::from_rows`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != SQUARE_LEN {
            return Err(PlayfairError::InvalidSquare(format!(
                "expected {SQUARE_LEN} letters, got {}",
                letters.len()
            )));
        }
        let mut rows = [[' '; SQUARE_SIDE]; SQUARE_SIDE];
        for (i, ch) in letters.into_iter().enumerate() {
            rows[i / SQUARE_SIDE][i % SQUARE_SIDE] = ch;
        }
        Self::from_rows(&rows)
    }
}

// Serialized as five 5-letter row strings: compact, readable in JSON test
// vectors, and shaped like the grid a UI renders.
impl Serialize for KeySquare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(SQUARE_SIDE))?;
        for r in 0..SQUARE_SIDE {
            seq.serialize_element(&self.row_string(r))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for KeySquare {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <[String; SQUARE_SIDE]>::deserialize(deserializer)?;
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != SQUARE_SIDE {
                return Err(de::Error::custom(format!(
                    "key square row {r} must have exactly {SQUARE_SIDE} letters"
                )));
            }
        }
        rows.join("").parse().map_err(de::Error::custom)
    }
}
