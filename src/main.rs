//! Kenpop Dashboard Server
//!
//! Loads the population table and county boundaries, then serves the
//! dashboard. Run with: cargo run --bin kenpop [-- --config <path>]
//!
//! # Configuration
//!
//! Read from `--config`, or the first of `<config_dir>/kenpop/config.toml`,
//! `/etc/kenpop/config.toml`, `./config.toml`. Environment variables:
//! - `KENPOP_DATA_PATH`: Population CSV (default: Mydata.csv)
//! - `KENPOP_BOUNDARIES_PATH`: County GeoJSON (default: gadm41_KEN_1.geojson)
//! - `KENPOP_API_HOST` / `KENPOP_API_PORT`: Bind address (default: 0.0.0.0:8501)
//! - `KENPOP_MIGRATION_THRESHOLD`: Migration threshold (default: 50000)
//! - `RUST_LOG`: Log filter (default: kenpop=info,tower_http=debug)

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use kenpop::api::{serve, AppState};
use kenpop::config::Config;
use kenpop::dataset::{Dataset, DatasetError};
use kenpop::logging::init_logging;

#[derive(Parser)]
#[command(name = "kenpop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kenyan county population dashboard")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load_with_env(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    tracing::info!("Starting Kenpop dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Population table: {:?}", config.data.population_path);
    tracing::info!("County boundaries: {:?}", config.data.boundaries_path);

    let dataset = match Dataset::load(&config.data.population_path, &config.data.boundaries_path)
    {
        Ok(dataset) => dataset,
        Err(e) => {
            report_startup_failure(&e);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(dataset, config.dashboard.clone());

    match serve(state, &config.api).await {
        Ok(()) => {
            tracing::info!("Kenpop dashboard stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Missing inputs are fatal: say which file, then stop
fn report_startup_failure(err: &DatasetError) {
    tracing::error!(error = %err, "Failed to load dataset");

    match err {
        DatasetError::ResourceNotFound { path, .. } => {
            eprintln!("Error: The file '{}' is not found.", path.display());
        }
        other => eprintln!("Error: {}", other),
    }
}
