//! Seed (or re-seed) the listings database from a fixture.

use anyhow::{Context, Result};
use clap::Parser;
use govdeals_tracker::config::StoreConfig;
use govdeals_tracker::seed;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Seed the listings database from a fixture")]
struct Cli {
    /// Path to the SQLite database file to (re)populate.
    #[arg(long)]
    database: Option<PathBuf>,

    /// Path to the JSON fixture containing listing data.
    #[arg(long)]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let defaults = StoreConfig::from_env()?;

    let report = seed::reseed(&defaults, cli.database, cli.fixture)
        .await
        .context("failed to seed listings")?;

    println!(
        "Seeded {} listings into {}",
        report.inserted,
        report.database_path.display()
    );
    Ok(())
}
