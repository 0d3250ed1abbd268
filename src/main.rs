use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use polysecret::interpolate::interpolate_at_zero;
use polysecret::shares::ShareFile;

#[derive(Parser)]
#[command(name = "polysecret")]
#[command(about = "Reconstruct a Shamir-shared secret from a JSON share file", long_about = None)]
struct Cli {
    /// Path to the share file
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read share file {}", cli.input.display()))?;
    let shares = ShareFile::parse(&text)?;
    let points = shares.threshold_points()?;
    let secret = interpolate_at_zero(&points)?;

    println!("Secret (constant term c): {}", secret);

    Ok(())
}
