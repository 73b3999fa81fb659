//! Example: Align two JSON documents and print a text report
//!
//! Usage: cargo run --example align_json <left.json> <right.json>

use std::env;
use std::io;

use spec_align::{ingest, Aligner, Renderer, TextRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <left.json> <right.json>", args[0]);
        std::process::exit(1);
    }

    eprintln!("Parsing left: {}", args[1]);
    let left = ingest::parse_file(&args[1])?;

    eprintln!("Parsing right: {}", args[2]);
    let right = ingest::parse_file(&args[2])?;

    let alignment = Aligner::new().align_documents(&left, &right)?;
    TextRenderer.render_to(&alignment, &mut io::stdout())?;

    eprintln!("\nAlignment finished {}", alignment.counts);
    Ok(())
}
