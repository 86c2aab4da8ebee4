//! # Digraph Substitution
//!
//! The heart of the cipher: map one digraph to another through the key
//! square. Three cases, decided by how the two letters sit relative to
//! each other:
//!
//! - **same row**: each letter shifts one column, wrapping around the row;
//! - **same column**: each letter shifts one row, wrapping around the
//!   column;
//! - **rectangle**: each letter keeps its row and takes the other
//!   letter's column.
//!
//! Row and column shifts move forward when encrypting and backward when
//! decrypting. The rectangle swap is its own inverse, so both directions
//! use the identical formula.

use crate::consts::SQUARE_SIDE;
use crate::digraph::Digraph;
use crate::direction::Direction;
use crate::key_square::KeySquare;

/// Substitute a single digraph through the key square.
///
/// Total function: both letters of a [`Digraph`] are alphabet letters by
/// construction, and every alphabet letter has a position in every
/// [`KeySquare`], so no lookup can fail.
///
/// ```
/// use playfair_rs::{substitute, Digraph, Direction, KeySquare};
///
/// let square = KeySquare::derive("PLAYFAIR");
/// let sealed = substitute(&square, "HE".parse().unwrap(), Direction::Encrypt);
/// assert_eq!(sealed.to_string(), "KG");
/// ```
pub fn substitute(square: &KeySquare, digraph: Digraph, direction: Direction) -> Digraph {
    let (r1, c1) = square.pos(digraph.a);
    let (r2, c2) = square.pos(digraph.b);

    if r1 == r2 {
        let shift = direction.shift();
        Digraph::from_bytes(
            square.at(r1, (c1 + shift) % SQUARE_SIDE),
            square.at(r2, (c2 + shift) % SQUARE_SIDE),
        )
    } else if c1 == c2 {
        let shift = direction.shift();
        Digraph::from_bytes(
            square.at((r1 + shift) % SQUARE_SIDE, c1),
            square.at((r2 + shift) % SQUARE_SIDE, c2),
        )
    } else {
        Digraph::from_bytes(square.at(r1, c2), square.at(r2, c1))
    }
}

/// Substitute a digraph sequence in order.
pub fn substitute_all(square: &KeySquare, digraphs: &[Digraph], direction: Direction) -> Vec<Digraph> {
    digraphs
        .iter()
        .map(|&d| substitute(square, d, direction))
        .collect()
}
