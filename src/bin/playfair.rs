// src/bin/playfair.rs
//! Terminal front end: key square grid + per-pair steps + final text

use anyhow::{bail, Result};
use playfair_rs::{decrypt, encrypt, Direction};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (direction, keyword, text) = match args.as_slice() {
        [mode, keyword, rest @ ..] if !rest.is_empty() => {
            let direction = match mode.as_str() {
                "encrypt" | "e" => Direction::Encrypt,
                "decrypt" | "d" => Direction::Decrypt,
                other => bail!("unknown mode {other:?}, expected encrypt or decrypt"),
            };
            (direction, keyword.clone(), rest.join(" "))
        }
        _ => bail!("usage: playfair <encrypt|decrypt> <keyword> <text...>"),
    };

    info!(?direction, %keyword, "running cipher");

    let result = match direction {
        Direction::Encrypt => encrypt(&keyword, &text),
        Direction::Decrypt => decrypt(&keyword, &text),
    };

    println!("Key square for {keyword:?}:");
    println!("{}", playfair_rs::KeySquare::derive(&keyword));
    println!();

    if result.digraphs.is_empty() {
        println!("(no letters in input)");
        return Ok(());
    }

    println!("Steps:");
    for (input, output) in result.steps() {
        println!("  {input} -> {output}");
    }
    println!();

    match direction {
        Direction::Encrypt => println!("Encrypted: {}", result.text),
        Direction::Decrypt => println!("Decrypted: {}", result.text),
    }

    Ok(())
}
