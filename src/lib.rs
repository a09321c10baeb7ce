//! # Kenpop
//!
//! Kenyan County Population Dashboard - county population statistics over
//! time, served as a single-page interactive dashboard.
//!
//! ## Features
//!
//! - **Choropleth map**: population by county for the selected year
//! - **Heatmap**: every year against every county
//! - **Gains/Losses**: largest year-over-year gain and loss
//! - **Migration donuts**: share of counties gaining or losing more than a threshold
//! - **Ranked table**: counties ordered by population
//!
//! ## Modules
//!
//! - [`dataset`]: Loading the population CSV and county boundaries
//! - [`metrics`]: Pure year-scoped computations over the table
//! - [`charts`]: Vega-Lite / Plotly chart documents
//! - [`dashboard`]: Selection handling and the page model
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kenpop::dashboard::{build_dashboard, Selection};
//! use kenpop::config::DashboardConfig;
//! use kenpop::dataset::Dataset;
//! use kenpop::theme::ColorTheme;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("Mydata.csv", "gadm41_KEN_1.geojson")?;
//!
//!     let selection = Selection::resolve(&dataset.table, Some(2020), None, ColorTheme::Blues)?;
//!     let view = build_dashboard(&dataset, selection, &DashboardConfig::default());
//!
//!     println!("Top gainer: {}", view.gains_losses.top.label);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod logging;
pub mod metrics;
pub mod theme;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetResult, GeoBoundary, PopulationRecord, PopulationTable,
};

pub use metrics::{
    classify_migration, compute_year_over_year_delta, format_compact_number, select_year,
    sort_by_population_descending, MigrationSummary, PopulationDelta,
    DEFAULT_MIGRATION_THRESHOLD,
};

pub use dashboard::{build_dashboard, DashboardView, Selection, SelectionError};

pub use api::{build_router, serve, ApiError, AppState};

pub use theme::{ColorTheme, DonutColor};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, DataConfig, LoggingConfig};
