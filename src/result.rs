//! # Cipher Result
//!
//! The derived output of one full pipeline run. Besides the final string
//! it keeps the input digraphs and their substitutions in order, so a
//! presentation layer can render a step-by-step trace without re-running
//! any stage.

use serde::{Deserialize, Serialize};

use crate::assemble::assemble;
use crate::digraph::Digraph;
use crate::direction::Direction;
use crate::key_square::KeySquare;
use crate::segment::segment;
use crate::substitute::substitute_all;

/// Everything one encrypt or decrypt run produces.
///
/// A pure value, recomputed whenever keyword, text, or direction changes;
/// identical inputs always produce an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResult {
    /// The direction this result was computed under.
    pub direction: Direction,
    /// Input pairs, in segmentation order.
    pub digraphs: Vec<Digraph>,
    /// Substituted pairs, index-aligned with `digraphs`.
    pub substituted: Vec<Digraph>,
    /// The assembled final string (cleanup applied when decrypting).
    pub text: String,
}

impl CipherResult {
    /// Run the full pipeline: segment, substitute, assemble.
    pub(crate) fn compute(square: &KeySquare, text: &str, direction: Direction) -> Self {
        let digraphs = segment(text);
        let substituted = substitute_all(square, &digraphs, direction);
        let text = assemble(&substituted, direction);
        Self {
            direction,
            digraphs,
            substituted,
            text,
        }
    }

    /// Input/output pairs zipped in order, for step-through displays.
    pub fn steps(&self) -> impl Iterator<Item = (Digraph, Digraph)> + '_ {
        self.digraphs
            .iter()
            .copied()
            .zip(self.substituted.iter().copied())
    }
}
