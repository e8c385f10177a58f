//! # Burin CLI
//!
//! Reads the fixed input document and prints the generated command-buffer
//! code to stdout. No flags; diagnostics and errors go to stderr.

use std::fs;

const INPUT_PATH: &str = "res/sample.svg";

fn main() {
    let input = fs::read_to_string(INPUT_PATH).expect("Failed to read input file");

    match burin::convert(&input) {
        Ok(code) => print!("{code}"),
        Err(e) => {
            eprintln!("✗ Conversion failed: {e}");
            std::process::exit(1);
        }
    }
}
