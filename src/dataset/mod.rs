//! Kenpop Dataset
//!
//! The data loader and the types it produces:
//!
//! - **types**: `PopulationRecord`, `PopulationTable`, `GeoBoundary`
//! - **loader**: CSV and GeoJSON loading, the `Dataset` bundle
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use kenpop::dataset::Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("Mydata.csv", "gadm41_KEN_1.geojson")?;
//!     println!("{} records, years {:?}", dataset.table.len(), dataset.table.years());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult, Resource};
pub use loader::{load_geo_boundaries, load_population_table, parse_population_csv, Dataset};
pub use types::{GeoBoundary, PopulationRecord, PopulationTable};
