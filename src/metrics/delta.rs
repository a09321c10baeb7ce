//! Year-over-year population change per county

use serde::Serialize;
use std::collections::HashMap;

use super::select::select_year;
use crate::dataset::PopulationTable;

/// Population of a county in the selected year and its change from the year before
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PopulationDelta {
    pub county: String,
    pub id: String,
    pub population: u64,
    pub population_difference: i64,
}

/// Compute `population(year) - population(year - 1)` for every county of `year`
///
/// The prior record is looked up by `id` in exactly `year - 1`; a county with
/// no record there counts as 0, so the minimum year of the table yields the
/// full population as its difference, as does `i32::MIN`. The result is sorted by difference,
/// largest gain first, ties in table order.
pub fn compute_year_over_year_delta(table: &PopulationTable, year: i32) -> Vec<PopulationDelta> {
    let prior_year = year.checked_sub(1);
    let previous: HashMap<&str, u64> = table
        .records()
        .iter()
        .filter(|r| Some(r.year) == prior_year)
        .map(|r| (r.id.as_str(), r.population))
        .collect();

    let mut deltas: Vec<PopulationDelta> = select_year(table, year)
        .into_iter()
        .map(|r| {
            let prior = previous.get(r.id.as_str()).copied().unwrap_or(0);
            PopulationDelta {
                population_difference: r.population as i64 - prior as i64,
                county: r.county,
                id: r.id,
                population: r.population,
            }
        })
        .collect();

    deltas.sort_by(|a, b| b.population_difference.cmp(&a.population_difference));
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PopulationRecord;

    fn table() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord::new("A", "1", 2019, 100_000),
            PopulationRecord::new("C", "3", 2019, 300_000),
            PopulationRecord::new("A", "1", 2020, 160_000),
            PopulationRecord::new("C", "3", 2020, 240_000),
            PopulationRecord::new("A", "1", 2021, 170_000),
            PopulationRecord::new("B", "2", 2021, 5_000),
            PopulationRecord::new("C", "3", 2021, 250_000),
        ])
    }

    #[test]
    fn test_gain_against_prior_year() {
        let deltas = compute_year_over_year_delta(&table(), 2020);

        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].county, "A");
        assert_eq!(deltas[0].population, 160_000);
        assert_eq!(deltas[0].population_difference, 60_000);
        assert_eq!(deltas[1].county, "C");
        assert_eq!(deltas[1].population_difference, -60_000);
    }

    #[test]
    fn test_new_county_counts_prior_as_zero() {
        let deltas = compute_year_over_year_delta(&table(), 2021);
        let b = deltas.iter().find(|d| d.county == "B").unwrap();

        assert_eq!(b.population_difference, 5_000);
    }

    #[test]
    fn test_minimum_year_is_defined() {
        let deltas = compute_year_over_year_delta(&table(), 2019);

        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].county, "C");
        assert_eq!(deltas[0].population_difference, 300_000);
        assert_eq!(deltas[1].population_difference, 100_000);
    }

    #[test]
    fn test_non_contiguous_years() {
        let table = PopulationTable::new(vec![
            PopulationRecord::new("A", "1", 2009, 50_000),
            PopulationRecord::new("A", "1", 2019, 90_000),
        ]);
        let deltas = compute_year_over_year_delta(&table, 2019);

        assert_eq!(deltas[0].population_difference, 90_000);
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let table = PopulationTable::new(vec![
            PopulationRecord::new("X", "1", 2021, 10),
            PopulationRecord::new("Y", "2", 2021, 30),
            PopulationRecord::new("Z", "3", 2021, 10),
        ]);
        let deltas = compute_year_over_year_delta(&table, 2021);
        let counties: Vec<&str> = deltas.iter().map(|d| d.county.as_str()).collect();

        assert_eq!(counties, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_lowest_representable_year() {
        let table = PopulationTable::new(vec![
            PopulationRecord::new("A", "1", i32::MAX, 10),
            PopulationRecord::new("A", "1", i32::MIN, 40),
        ]);
        let deltas = compute_year_over_year_delta(&table, i32::MIN);

        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].population_difference, 40);
        assert!(compute_year_over_year_delta(&self::table(), i32::MIN).is_empty());
    }

    #[test]
    fn test_absent_year_is_empty() {
        assert!(compute_year_over_year_delta(&table(), 1990).is_empty());
    }
}
