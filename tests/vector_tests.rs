//! tests/vector_tests.rs
//! JSON-driven cipher vectors: square rows, pair lists, both directions

use playfair_rs::{decrypt, encrypt, segment, KeySquare};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CipherVector {
    name: String,
    keyword: String,
    /// Expected square rows; omitted where another vector already pins
    /// the same keyword's square.
    #[serde(default)]
    square: Option<Vec<String>>,
    plaintext: String,
    pairs: Vec<String>,
    ciphertext: String,
    decrypted: String,
}

fn load_vectors() -> Vec<CipherVector> {
    let content = include_str!("test_data/playfair_vectors.json");
    serde_json::from_str(content).unwrap_or_else(|e| panic!("Failed to parse vectors: {e}"))
}

#[test]
fn vectors_pin_key_squares() {
    for vector in load_vectors() {
        let Some(rows) = &vector.square else {
            continue;
        };
        let square = KeySquare::derive(&vector.keyword);
        for (r, expected) in rows.iter().enumerate() {
            assert_eq!(
                square.row_string(r),
                *expected,
                "vector {:?}, row {r}",
                vector.name
            );
        }
    }
}

#[test]
fn vectors_pin_segmentation() {
    for vector in load_vectors() {
        let pairs: Vec<String> = segment(&vector.plaintext)
            .iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(pairs, vector.pairs, "vector {:?}", vector.name);
    }
}

#[test]
fn vectors_encrypt() {
    for vector in load_vectors() {
        let sealed = encrypt(&vector.keyword, &vector.plaintext);
        assert_eq!(sealed.text, vector.ciphertext, "vector {:?}", vector.name);
    }
}

#[test]
fn vectors_decrypt() {
    for vector in load_vectors() {
        let opened = decrypt(&vector.keyword, &vector.ciphertext);
        assert_eq!(opened.text, vector.decrypted, "vector {:?}", vector.name);
    }
}
