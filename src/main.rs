//! Shield Loadouts - Entry Point
//!
//! Reads the reference tables below the data root and writes the data file
//! used by the shield tester.

use clap::Parser;
use std::path::PathBuf;

use shield_loadouts::core::config::PipelineConfig;
use shield_loadouts::core::error::Result;
use shield_loadouts::pipeline::{run, write_data_file};

/// Build the shield tester data file
#[derive(Parser, Debug)]
#[command(name = "shield-loadouts")]
#[command(about = "Build ship loadouts and engineered shield data for the shield tester")]
struct Args {
    /// Directory containing coriolis-data/ and FDevIDs/
    #[arg(long, default_value = ".")]
    data_root: PathBuf,

    /// TOML config overriding paths and engineering selections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file
    #[arg(long, short = 'o', default_value = "data.json")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("shield_loadouts={}", level).into()),
        )
        .init();

    let config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    tracing::info!(data_root = %args.data_root.display(), "Shield Loadouts starting...");
    let data = run(&config, &args.data_root)?;
    write_data_file(&data, &args.output)?;

    println!(
        "{} ships, {} booster variants written to {}",
        data.ships.len(),
        data.shield_booster_variants.len(),
        args.output.display()
    );
    Ok(())
}
