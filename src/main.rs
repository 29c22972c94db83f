//! Icon pack builder for the Madizi web app.
//!
//! Reads one source image and emits the fixed PWA icon set:
//! - app and maskable PNG icons, Apple touch icon, PNG favicons
//! - a multi-resolution `favicon.ico`
//! - a `manifest.webmanifest` referencing the app icons
//! - a zip archive bundling the output directory

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod archive;
mod error;
mod manifest;
mod render;
mod specs;

use error::BuildError;

#[derive(Parser)]
#[command(name = "madizi-pack")]
#[command(about = "Build the Madizi PWA icon pack from a single source image")]
struct Cli {
    /// Source image, any format decodable to RGBA
    #[arg(long, default_value = "source.png")]
    source: PathBuf,

    /// Directory the generated assets are written to
    #[arg(long, default_value = "dist_madizi_assets")]
    out_dir: PathBuf,

    /// Zip archive bundling the output directory
    #[arg(long, default_value = "madizi-logo-pack.zip")]
    zip: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// The whole pipeline, strictly linear: load, render, manifest, archive.
fn run(cli: &Cli) -> Result<(), BuildError> {
    let source = render::load_source(&cli.source)?;

    render::render_icon_set(&source, &cli.out_dir)?;
    manifest::write_manifest(&cli.out_dir)?;
    archive::package_archive(&cli.out_dir, &cli.zip)?;

    println!("Generated {}", cli.zip.display());
    println!("Assets in {}", cli.out_dir.display());
    Ok(())
}
