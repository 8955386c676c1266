//! Exoplanet survey CSV cleaner CLI
//!
//! Detects whether the input is a tabular KOI/TOI export or a light curve
//! and writes the cleaned table to the requested path.

use anyhow::Result;
use clap::Parser;
use exoplanet_cleaner::{clean_lightcurve, clean_tabular, detect_kind, InputKind, Table};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "exoplanet-cleaner", about = "Clean exoplanet survey CSVs or light curves")]
struct Cli {
    /// Raw input CSV
    #[arg(long)]
    input: PathBuf,

    /// Cleaned output CSV
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exoplanet_cleaner=info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!("Reading {}", cli.input.display());
    let mut table = Table::read_csv(&cli.input)?;

    let cleaned = match detect_kind(&table) {
        InputKind::LightCurve => {
            info!("Detected: light curve");
            clean_lightcurve(&table)?
        }
        InputKind::Tabular => {
            info!("Detected: tabular dataset (KOI/TOI/K2)");
            clean_tabular(&mut table);
            table
        }
    };

    cleaned.write_csv(&cli.output)?;
    info!(
        "Clean file written to {} ({} rows)",
        cli.output.display(),
        cleaned.row_count()
    );

    Ok(())
}
