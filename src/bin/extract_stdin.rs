//! Simple CLI that reads resume text from stdin and outputs JSON to stdout.
//! Useful for piping text produced by other converters.

use rs_resume_parser::parse;
use rs_resume_parser::source::plain::decode_text;
use std::io::{self, Read};

fn main() {
    // Read raw bytes so that badly encoded input still parses
    let mut bytes = Vec::new();
    if io::stdin().read_to_end(&mut bytes).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let record = parse(&decode_text(&bytes));

    println!("{}", serde_json::to_string(&record).unwrap_or_default());
}
