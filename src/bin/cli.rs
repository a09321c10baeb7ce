//! Kenpop CLI
//!
//! Offline access to the dashboard figures, computed straight from the
//! input files:
//! - List years
//! - Rank counties by population
//! - Show year-over-year changes and migration shares
//! - Print the gains/losses summary
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kenpop::config::{generate_default_config, Config};
use kenpop::dashboard::{build_dashboard, Selection};
use kenpop::dataset::{load_population_table, Dataset, PopulationTable};
use kenpop::logging::init_logging;
use kenpop::metrics::{
    classify_migration, compute_year_over_year_delta, format_compact_number, select_year,
    sort_by_population_descending,
};

#[derive(Parser)]
#[command(name = "kenpop-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kenyan county population figures from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Population CSV (overrides config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// County boundaries GeoJSON (overrides config)
    #[arg(long, global = true)]
    pub boundaries: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the years present in the data, newest first
    Years,

    /// Rank counties by population
    Top {
        /// Year (default: newest)
        #[arg(short, long)]
        year: Option<i32>,
        /// Number of counties to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Year-over-year population change per county
    Deltas {
        /// Year (default: newest)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Share of counties with inbound/outbound migration
    Migration {
        /// Year (default: newest)
        #[arg(short, long)]
        year: Option<i32>,
        /// Change that counts as migration (default: from config)
        #[arg(short, long)]
        threshold: Option<u64>,
    },

    /// Gains/losses and migration panel for a year
    Summary {
        /// Year (default: newest)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data) = &cli.data {
        config.data.population_path = data.clone();
    }
    if let Some(boundaries) = &cli.boundaries {
        config.data.boundaries_path = boundaries.clone();
    }

    init_logging(&config.logging);

    let json = match cli.format.as_str() {
        "json" => true,
        "table" => false,
        other => bail!("Unknown output format: {}. Use table or json", other),
    };

    match cli.command {
        Commands::Years => {
            let table = load_table(&config)?;
            let years = table.years();

            if json {
                println!("{}", serde_json::to_string_pretty(&years)?);
            } else {
                for year in years {
                    println!("{}", year);
                }
            }
        }

        Commands::Top { year, limit } => {
            let table = load_table(&config)?;
            let year = year_or_newest(&table, year)?;
            let ranked = sort_by_population_descending(select_year(&table, year));

            if json {
                let top: Vec<_> = ranked.into_iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&top)?);
            } else if ranked.is_empty() {
                println!("No records for {}", year);
            } else {
                println!("{:<4} {:<24} {:>12}", "#", "County", "Population");
                println!("{}", "-".repeat(42));
                for (rank, record) in ranked.iter().take(limit).enumerate() {
                    println!(
                        "{:<4} {:<24} {:>12}",
                        rank + 1,
                        record.county,
                        record.population
                    );
                }
            }
        }

        Commands::Deltas { year } => {
            let table = load_table(&config)?;
            let year = year_or_newest(&table, year)?;
            let deltas = compute_year_over_year_delta(&table, year);

            if json {
                println!("{}", serde_json::to_string_pretty(&deltas)?);
            } else {
                if !table.has_previous_year(year) {
                    println!("(no data for the year before {}; changes are against zero)", year);
                }
                println!("{:<24} {:>12} {:>12}", "County", "Population", "Change");
                println!("{}", "-".repeat(50));
                for delta in &deltas {
                    println!(
                        "{:<24} {:>12} {:>12}",
                        delta.county,
                        format_compact_number(delta.population as i64),
                        format_compact_number(delta.population_difference)
                    );
                }
            }
        }

        Commands::Migration { year, threshold } => {
            let table = load_table(&config)?;
            let year = year_or_newest(&table, year)?;
            let threshold = threshold.unwrap_or(config.dashboard.migration_threshold);
            let summary = classify_migration(&compute_year_over_year_delta(&table, year), threshold);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Migration {} (threshold {})", year, threshold);
                println!(
                    "  Inbound:  {:>3} % ({} of {} counties)",
                    summary.inbound_percent, summary.inbound_count, summary.county_count
                );
                println!(
                    "  Outbound: {:>3} % ({} of {} counties)",
                    summary.outbound_percent, summary.outbound_count, summary.county_count
                );
            }
        }

        Commands::Summary { year } => {
            let dataset = Dataset::load(&config.data.population_path, &config.data.boundaries_path)
                .context("Failed to load dataset")?;
            let selection = Selection::resolve(
                &dataset.table,
                year,
                None,
                config.dashboard.default_theme,
            )?;
            let view = build_dashboard(&dataset, selection, &config.dashboard);

            if json {
                let summary = serde_json::json!({
                    "year": selection.year,
                    "gains_losses": view.gains_losses,
                    "migration": view.migration.summary,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} - {}", view.title, selection.year);
                println!();
                println!("Gains/Losses");
                for card in [&view.gains_losses.top, &view.gains_losses.bottom] {
                    println!("  {:<24} {:>8} {:>8}", card.label, card.value, card.delta);
                }
                println!();
                println!("Counties Migration");
                println!("  Inbound:  {} %", view.migration.summary.inbound_percent);
                println!("  Outbound: {} %", view.migration.summary.outbound_percent);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn load_table(config: &Config) -> anyhow::Result<PopulationTable> {
    load_population_table(&config.data.population_path).context("Failed to load population table")
}

fn year_or_newest(table: &PopulationTable, year: Option<i32>) -> anyhow::Result<i32> {
    match (year, table.year_bounds()) {
        (Some(y), _) => Ok(y),
        (None, Some((_, newest))) => Ok(newest),
        (None, None) => bail!("The population table is empty"),
    }
}
