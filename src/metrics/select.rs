//! Year-scoped selection and ranking

use crate::dataset::{PopulationRecord, PopulationTable};

/// All records for `year`, in table order. Empty when the year is absent.
pub fn select_year(table: &PopulationTable, year: i32) -> Vec<PopulationRecord> {
    table
        .records()
        .iter()
        .filter(|r| r.year == year)
        .cloned()
        .collect()
}

/// Sort records by population, largest first
///
/// Stable: records with equal population keep their input order.
pub fn sort_by_population_descending(mut records: Vec<PopulationRecord>) -> Vec<PopulationRecord> {
    records.sort_by(|a, b| b.population.cmp(&a.population));
    records
}

/// Distinct years in the table, newest first
pub fn distinct_years(table: &PopulationTable) -> Vec<i32> {
    table.years()
}

/// `(min, max)` year of the table
pub fn year_bounds(table: &PopulationTable) -> Option<(i32, i32)> {
    table.year_bounds()
}

/// Largest population among `records`, 0 when empty
pub fn max_population(records: &[PopulationRecord]) -> u64 {
    records.iter().map(|r| r.population).max().unwrap_or(0)
}
