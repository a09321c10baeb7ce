//! Kenpop Metrics Engine
//!
//! Pure functions over the loaded population table. Nothing here performs
//! I/O or keeps state; callers pass the table and the selected year in and
//! get freshly computed values back.
//!
//! - **select**: year filtering, population ranking
//! - **delta**: year-over-year change per county
//! - **migration**: inbound/outbound classification against a threshold
//! - **format**: compact `"2.5 M"` / `"143 K"` rendering
//!
//! # Example
//!
//! ```rust
//! use kenpop::dataset::{PopulationRecord, PopulationTable};
//! use kenpop::metrics::*;
//!
//! let table = PopulationTable::new(vec![
//!     PopulationRecord::new("A", "1", 2019, 100_000),
//!     PopulationRecord::new("A", "1", 2020, 160_000),
//! ]);
//!
//! let deltas = compute_year_over_year_delta(&table, 2020);
//! assert_eq!(deltas[0].population_difference, 60_000);
//!
//! let migration = classify_migration(&deltas, DEFAULT_MIGRATION_THRESHOLD);
//! assert_eq!(migration.inbound_percent, 100);
//! assert_eq!(format_compact_number(2_500_000), "2.5 M");
//! ```

pub mod delta;
pub mod format;
pub mod migration;
pub mod select;

pub use delta::{compute_year_over_year_delta, PopulationDelta};
pub use format::format_compact_number;
pub use migration::{classify_migration, MigrationSummary, DEFAULT_MIGRATION_THRESHOLD};
pub use select::{
    distinct_years, max_population, select_year, sort_by_population_descending, year_bounds,
};
