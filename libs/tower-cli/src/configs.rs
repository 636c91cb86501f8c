//! Configs command - detection labels to tower configs

use anyhow::{Context, Result};
use clap::Args;
use config::constants::DEFAULT_CONFIG_DIR;
use std::path::PathBuf;
use tower_builder::labels::generate_configs;

/// Arguments for the configs command
#[derive(Args)]
pub struct ConfigsArgs {
    /// Directory of per-frame label .txt files
    pub label_dir: PathBuf,

    /// Directory the configs are written to
    #[arg(short, long, default_value = DEFAULT_CONFIG_DIR)]
    pub output_dir: PathBuf,
}

/// Execute the configs command
pub fn execute(args: ConfigsArgs) -> Result<()> {
    let written = generate_configs(&args.label_dir, &args.output_dir).with_context(|| {
        format!(
            "Failed to generate configs from {}",
            args.label_dir.display()
        )
    })?;

    for path in &written {
        println!("Generated {}", path.display());
    }
    println!("{} config(s) written to {}", written.len(), args.output_dir.display());
    Ok(())
}
