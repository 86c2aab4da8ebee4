//! tests/substitute_tests.rs
//! Row, column, and rectangle substitution rules plus inverse properties

use playfair_rs::{substitute, Digraph, Direction, KeySquare};

mod common;
use common::TEST_KEYWORD;

fn sub(square: &KeySquare, pair: &str, direction: Direction) -> String {
    substitute(square, pair.parse().unwrap(), direction).to_string()
}

#[test]
fn same_row_shifts_right_on_encrypt() {
    let square = KeySquare::derive(TEST_KEYWORD);
    // H and E share row 2 of the reference square
    assert_eq!(sub(&square, "HE", Direction::Encrypt), "KG");
    assert_eq!(sub(&square, "KG", Direction::Decrypt), "HE");
}

#[test]
fn same_row_wraps_around() {
    let square = KeySquare::derive(TEST_KEYWORD);
    // T sits in the last column of row 3 and wraps to N
    assert_eq!(sub(&square, "ST", Direction::Encrypt), "TN");
    assert_eq!(sub(&square, "TN", Direction::Decrypt), "ST");
}

#[test]
fn same_column_shifts_down_on_encrypt() {
    let square = KeySquare::derive(TEST_KEYWORD);
    // L and O share column 1
    assert_eq!(sub(&square, "LO", Direction::Encrypt), "RV");
    assert_eq!(sub(&square, "RV", Direction::Decrypt), "LO");
}

#[test]
fn same_column_wraps_around() {
    let square = KeySquare::derive(TEST_KEYWORD);
    // X sits in the last row of column 3 and wraps to Y
    assert_eq!(sub(&square, "SX", Direction::Encrypt), "XY");
    assert_eq!(sub(&square, "XY", Direction::Decrypt), "SX");
}

#[test]
fn rectangle_swaps_columns() {
    let square = KeySquare::derive(TEST_KEYWORD);
    assert_eq!(sub(&square, "LX", Direction::Encrypt), "YV");
    assert_eq!(sub(&square, "YV", Direction::Decrypt), "LX");
}

#[test]
fn rectangle_rule_is_self_inverse() {
    let square = KeySquare::derive(TEST_KEYWORD);
    // Encrypting a rectangle pair twice returns the original pair
    assert_eq!(sub(&square, "YV", Direction::Encrypt), "LX");
    assert_eq!(sub(&square, "LX", Direction::Decrypt), "YV");
}

#[test]
fn every_digraph_round_trips() {
    // Exhaustive over the full 25x25 digraph space, including equal pairs
    // (an equal pair hits the same-row rule and still inverts cleanly)
    for keyword in ["PLAYFAIR", "MONARCHY", ""] {
        let square = KeySquare::derive(keyword);
        for a in square.letters().collect::<Vec<_>>() {
            for b in square.letters().collect::<Vec<_>>() {
                let original = Digraph::new(a, b).unwrap();
                let sealed = substitute(&square, original, Direction::Encrypt);
                let opened = substitute(&square, sealed, Direction::Decrypt);
                assert_eq!(opened, original, "keyword {keyword:?}, pair {original}");
            }
        }
    }
}

#[test]
fn substitution_never_leaves_the_alphabet() {
    let square = KeySquare::derive("JULIET");
    for a in square.letters().collect::<Vec<_>>() {
        for b in square.letters().collect::<Vec<_>>() {
            let sealed = substitute(&square, Digraph::new(a, b).unwrap(), Direction::Encrypt);
            assert!(square.position(sealed.first()).is_some());
            assert!(square.position(sealed.second()).is_some());
        }
    }
}
