//! tests/common.rs
//! Common constants shared across test files

/// Standard test keyword used across test files and vectors
pub const TEST_KEYWORD: &str = "PLAYFAIR";

/// Plaintext matching TEST_CIPHERTEXT under TEST_KEYWORD
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT: &str = "HELLO";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_CIPHERTEXT: &str = "KGYVRV";

/// Reference square for TEST_KEYWORD, row by row
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SQUARE_ROWS: [&str; 5] = ["PLAYF", "IRBCD", "EGHKM", "NOQST", "UVWXZ"];
