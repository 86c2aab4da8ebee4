// src/lib.rs

//! Playfair digraph substitution cipher.
//!
//! The engine is a pipeline of four pure stages: derive a 5x5 [`KeySquare`]
//! from a keyword, [`segment`] the input text into two-letter [`Digraph`]s,
//! [`substitute`] each digraph through the square, and [`assemble`] the
//! substituted digraphs into the final string. Every stage is total over
//! arbitrary input: unrecognized characters are dropped during
//! normalization, never rejected.
//!
//! ```
//! use playfair_rs::{decrypt, encrypt};
//!
//! let sealed = encrypt("PLAYFAIR", "HELLO");
//! assert_eq!(sealed.text, "KGYVRV");
//!
//! let opened = decrypt("PLAYFAIR", &sealed.text);
//! assert_eq!(opened.text, "HELLO");
//! ```

pub mod assemble;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod decryptor;
pub mod digraph;
pub mod direction;
pub mod encryptor;
pub mod error;
pub mod key_square;
pub mod result;
pub mod segment;
pub mod substitute;
pub mod utils;

// High-level API — this is what 99% of users import
pub use decryptor::{decrypt, decrypt_with_square};
pub use encryptor::{encrypt, encrypt_with_square};
pub use error::PlayfairError;

// Core pipeline types, public so presentation layers can render the square,
// the step list, and the final text without re-deriving anything.
pub use digraph::Digraph;
pub use direction::Direction;
pub use key_square::KeySquare;
pub use result::CipherResult;

// Individual pipeline stages for callers that drive the steps themselves
pub use assemble::assemble;
pub use segment::segment;
pub use substitute::{substitute, substitute_all};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
