//! # Digraph
//!
//! The two-letter unit the cipher operates on. Digraphs produced by
//! segmentation always hold alphabet letters, which is what keeps the
//! substitution stage free of lookup failures.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::PlayfairError;
use crate::utils::fold_letter;

/// An ordered pair of cipher-alphabet letters.
///
/// Immutable value type. The public constructors fold case and `J` the
/// same way text normalization does; only non-letters are rejected.
///
/// ```
/// use playfair_rs::Digraph;
///
/// let d = Digraph::new('h', 'J').unwrap();
/// assert_eq!(d.to_string(), "HI");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    pub(crate) a: u8,
    pub(crate) b: u8,
}

impl Digraph {
    /// Build a digraph from two characters.
    ///
    /// # Errors
    ///
    /// [`PlayfairError::UnsupportedLetter`] if either character is not an
    /// ASCII letter.
    pub fn new(first: char, second: char) -> Result<Self, PlayfairError> {
        let a = fold_letter(first).ok_or(PlayfairError::UnsupportedLetter(first))?;
        let b = fold_letter(second).ok_or(PlayfairError::UnsupportedLetter(second))?;
        Ok(Self { a, b })
    }

    /// Internal constructor for letters already in the alphabet.
    #[inline]
    pub(crate) const fn from_bytes(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    /// The first letter.
    pub fn first(&self) -> char {
        self.a as char
    }

    /// The second letter.
    pub fn second(&self) -> char {
        self.b as char
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.a as char, self.b as char)
    }
}

impl FromStr for Digraph {
    type Err = PlayfairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => Self::new(first, second),
            _ => Err(PlayfairError::InvalidDigraph(s.to_string())),
        }
    }
}

// Serialized as the two-letter string, matching Display.
impl Serialize for Digraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
