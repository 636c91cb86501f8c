//! Build command - JSON config to GLB

use anyhow::{Context, Result};
use clap::Args;
use config::constants::DEFAULT_OUTPUT_FILE;
use std::path::PathBuf;
use tower_builder::{build_tower, TowerConfig};

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    /// Tower config JSON file
    pub config: PathBuf,

    /// Output .glb file path
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let config = TowerConfig::from_path(&args.config)
        .with_context(|| format!("Failed to load config: {}", args.config.display()))?;

    let model = build_tower(&config).context("Failed to build tower")?;

    tower_export::write_glb(&args.output, &model.mesh)
        .with_context(|| format!("Failed to export {}", args.output.display()))?;

    println!("Tower model saved as {}", args.output.display());
    println!("{}", model.summary);
    Ok(())
}
