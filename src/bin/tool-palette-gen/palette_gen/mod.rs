//! Helper tool rendering the derived palettes as an HTML swatch grid

#![forbid(unsafe_code)]

mod html;

use std::{env, fs, path::PathBuf};

use anyhow::Result;
use brandforge_back::color::harmony::{generate_harmonies, generate_semantic_suggestions};
use html::write_preview;

const DEFAULT_SEED: &str = "#6aabdb";

pub fn run() -> Result<()> {
    let seed = env::args().nth(1).unwrap_or_else(|| DEFAULT_SEED.to_string());

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-palette-gen");
    fs::create_dir_all(&out_dir)?;

    let harmonies = generate_harmonies(&seed);
    let semantics = generate_semantic_suggestions(&seed);

    let path = write_preview(&seed, &harmonies, &semantics, out_dir.join("palettes.html"))?;

    println!(
        "Generated palette preview for {seed}:\n  - {}",
        path.display()
    );

    Ok(())
}
