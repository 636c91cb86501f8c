//! Tower CLI - generate lattice tower models
//!
//! # Commands
//!
//! - `tower build <CONFIG> [OUTPUT]` - Build a tower from a JSON config and write a GLB
//! - `tower configs <LABEL_DIR>` - Write one config per detection label file
//!
//! # Usage
//!
//! ```bash
//! # Build from a config, writing tower.glb
//! tower build TOWER_CONFIG_frame_001.json
//!
//! # Generate configs from label files, then build one
//! tower configs runs/detect/predict/labels --output-dir tower_configs
//! tower build tower_configs/TOWER_CONFIG_frame_001.json frame_001.glb
//! ```

mod build;
mod configs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Tower CLI - generate lattice tower models
#[derive(Parser)]
#[command(name = "tower")]
#[command(about = "Generate triangular lattice tower models with sector antennas")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tower from a JSON config and write it as GLB
    Build(build::BuildArgs),

    /// Generate tower configs from detection label files
    Configs(configs::ConfigsArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build(args) => build::execute(args),
        Commands::Configs(args) => configs::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_defaults_output() {
        let cli = Cli::try_parse_from(["tower", "build", "tower.json"]).unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.output.to_str(), Some(config::constants::DEFAULT_OUTPUT_FILE));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_configs_output_dir() {
        let cli = Cli::try_parse_from(["tower", "-v", "configs", "labels", "-o", "out"]).unwrap();
        let Commands::Configs(args) = cli.command else {
            panic!("expected configs command");
        };
        assert_eq!(args.output_dir.to_str(), Some("out"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_build_requires_config() {
        assert!(Cli::try_parse_from(["tower", "build"]).is_err());
    }
}
