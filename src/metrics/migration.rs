//! Migration classification
//!
//! A county "migrates" inbound when its year-over-year gain exceeds the
//! threshold and outbound when its loss does. The two counts are reported as
//! a whole-number percentage of the distinct counties in the delta list.

use serde::Serialize;
use std::collections::HashSet;

use super::delta::PopulationDelta;

/// Absolute year-over-year change above which a county counts as migrating
pub const DEFAULT_MIGRATION_THRESHOLD: u64 = 50_000;

/// Share of counties with inbound/outbound migration for one year
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MigrationSummary {
    pub threshold: u64,
    pub county_count: usize,
    pub inbound_count: usize,
    pub outbound_count: usize,
    /// 0..=100, rounded half to even
    pub inbound_percent: u32,
    /// 0..=100, rounded half to even
    pub outbound_percent: u32,
}

impl MigrationSummary {
    /// Summary shown when no baseline year exists
    pub fn empty(threshold: u64) -> Self {
        Self {
            threshold,
            county_count: 0,
            inbound_count: 0,
            outbound_count: 0,
            inbound_percent: 0,
            outbound_percent: 0,
        }
    }
}

/// Classify deltas against `threshold` (strict comparisons on both sides)
///
/// Compared by magnitude, so any `u64` threshold is valid and a zero change
/// is never counted.
pub fn classify_migration(deltas: &[PopulationDelta], threshold: u64) -> MigrationSummary {
    let county_count = deltas
        .iter()
        .map(|d| d.county.as_str())
        .collect::<HashSet<_>>()
        .len();

    let inbound_count = deltas
        .iter()
        .filter(|d| {
            d.population_difference > 0 && d.population_difference.unsigned_abs() > threshold
        })
        .count();
    let outbound_count = deltas
        .iter()
        .filter(|d| {
            d.population_difference < 0 && d.population_difference.unsigned_abs() > threshold
        })
        .count();

    MigrationSummary {
        threshold,
        county_count,
        inbound_count,
        outbound_count,
        inbound_percent: percent_half_even(inbound_count, county_count),
        outbound_percent: percent_half_even(outbound_count, county_count),
    }
}

/// `part / whole * 100` rounded to the nearest integer, ties to even.
/// Clamped to 100 so repeated county names cannot push it past the range.
fn percent_half_even(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }

    let scaled = part as u64 * 100;
    let whole = whole as u64;
    let mut quotient = scaled / whole;
    let twice_remainder = (scaled % whole) * 2;

    if twice_remainder > whole || (twice_remainder == whole && quotient % 2 == 1) {
        quotient += 1;
    }

    quotient.min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(county: &str, difference: i64) -> PopulationDelta {
        PopulationDelta {
            county: county.to_string(),
            id: county.to_lowercase(),
            population: 1_000_000,
            population_difference: difference,
        }
    }

    #[test]
    fn test_inbound_above_threshold() {
        let deltas = vec![delta("A", 60_000)];
        let summary = classify_migration(&deltas, DEFAULT_MIGRATION_THRESHOLD);

        assert_eq!(summary.inbound_count, 1);
        assert_eq!(summary.outbound_count, 0);
        assert_eq!(summary.inbound_percent, 100);
    }

    #[test]
    fn test_threshold_is_strict() {
        let deltas = vec![delta("A", 50_000), delta("B", -50_000), delta("C", 0)];
        let summary = classify_migration(&deltas, 50_000);

        assert_eq!(summary.inbound_count, 0);
        assert_eq!(summary.outbound_count, 0);
    }

    #[test]
    fn test_percentages_of_distinct_counties() {
        let deltas = vec![
            delta("A", 80_000),
            delta("B", 51_000),
            delta("C", 10),
            delta("D", -70_000),
            delta("E", -10),
            delta("F", 0),
        ];
        let summary = classify_migration(&deltas, 50_000);

        assert_eq!(summary.county_count, 6);
        assert_eq!(summary.inbound_count, 2);
        assert_eq!(summary.outbound_count, 1);
        // 33.33 and 16.67
        assert_eq!(summary.inbound_percent, 33);
        assert_eq!(summary.outbound_percent, 17);
        assert!(summary.inbound_count + summary.outbound_count <= summary.county_count);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 1/8 = 12.5 -> 12, 3/8 = 37.5 -> 38
        assert_eq!(percent_half_even(1, 8), 12);
        assert_eq!(percent_half_even(3, 8), 38);
        // 1/40 = 2.5 -> 2
        assert_eq!(percent_half_even(1, 40), 2);
        assert_eq!(percent_half_even(2, 3), 67);
    }

    #[test]
    fn test_empty_deltas() {
        let summary = classify_migration(&[], 50_000);

        assert_eq!(summary, MigrationSummary::empty(50_000));
    }

    #[test]
    fn test_huge_thresholds_count_nothing() {
        let deltas = vec![delta("A", 0), delta("B", i64::MAX), delta("C", i64::MIN)];

        for threshold in [u64::MAX, 1 << 63] {
            let summary = classify_migration(&deltas, threshold);

            assert_eq!(summary.inbound_count, 0, "threshold {threshold}");
            assert_eq!(summary.outbound_count, 0, "threshold {threshold}");
            assert_eq!(summary.inbound_percent, 0);
        }
    }

    #[test]
    fn test_threshold_below_extreme_change() {
        let deltas = vec![delta("A", i64::MIN), delta("B", 0)];
        let summary = classify_migration(&deltas, (1 << 63) - 1);

        assert_eq!(summary.outbound_count, 1);
        assert_eq!(summary.inbound_count, 0);
        assert!(summary.inbound_count + summary.outbound_count <= summary.county_count);
    }

    #[test]
    fn test_percentages_in_range() {
        let deltas = vec![delta("A", 90_000), delta("A", 95_000)];
        let summary = classify_migration(&deltas, 50_000);

        assert!(summary.inbound_percent <= 100);
        assert!(summary.outbound_percent <= 100);
    }
}
