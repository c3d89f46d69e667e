//! Build script for sporlalbum.
//!
//! Places the `.env.example` configuration template next to the `.env` file the
//! binary reads at startup, so a fresh install has something to copy from:
//! - Linux: `~/.local/share/sporlalbum/.env.example`
//! - macOS: `~/Library/Application Support/sporlalbum/.env.example`
//! - Windows: `%LOCALAPPDATA%/sporlalbum/.env.example`

use std::{env, fs, path::PathBuf};

const TEMPLATE: &str = ".env.example";

/// Copies the configuration template into the local data directory.
///
/// A missing template only produces a cargo warning. Failing to create the
/// target directory or to write the copy fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={TEMPLATE}");

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(TEMPLATE);
    if !template.is_file() {
        println!(
            "cargo:warning={TEMPLATE} not found at {}",
            template.display()
        );
        return Ok(());
    }

    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sporlalbum");
    fs::create_dir_all(&data_dir)?;
    fs::copy(&template, data_dir.join(TEMPLATE))?;

    Ok(())
}
