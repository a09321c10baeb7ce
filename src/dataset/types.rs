//! Core data types for the population dataset
//!
//! - `PopulationRecord`: population of one county in one year
//! - `PopulationTable`: the ordered collection of records
//! - `GeoBoundary`: the county boundary document the choropleth is drawn on

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::error::{DatasetError, DatasetResult};

/// Population of a single county in a single year
///
/// `(county, year)` is the natural key of the table; `id` joins the record to
/// a feature of the [`GeoBoundary`] document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopulationRecord {
    pub county: String,
    pub year: i32,
    pub population: u64,
    pub id: String,
}

impl PopulationRecord {
    pub fn new(county: impl Into<String>, id: impl Into<String>, year: i32, population: u64) -> Self {
        Self {
            county: county.into(),
            year,
            population,
            id: id.into(),
        }
    }
}

/// Ordered sequence of population records, in file order
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PopulationTable {
    records: Vec<PopulationRecord>,
}

impl PopulationTable {
    pub fn new(records: Vec<PopulationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present in the table, newest first
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .records
            .iter()
            .map(|r| r.year)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }

    /// Oldest and newest year, or `None` for an empty table
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.records.iter().any(|r| r.year == year)
    }

    /// True when `year - 1` exists and has records
    pub fn has_previous_year(&self, year: i32) -> bool {
        year.checked_sub(1)
            .map(|prev| self.contains_year(prev))
            .unwrap_or(false)
    }

    /// Distinct county names in first-seen order
    pub fn counties(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.county.as_str()))
            .map(|r| r.county.as_str())
            .collect()
    }
}

impl FromIterator<PopulationRecord> for PopulationTable {
    fn from_iter<T: IntoIterator<Item = PopulationRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// County boundary document (a GeoJSON `FeatureCollection`)
///
/// Kept opaque: the document is handed to the map renderer as-is. Features are
/// matched to records through their `properties.id` value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct GeoBoundary {
    document: Value,
}

impl GeoBoundary {
    /// Wrap a parsed JSON document, checking that it is a FeatureCollection
    pub fn from_value(document: Value) -> DatasetResult<Self> {
        match document.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => {}
            Some(other) => {
                return Err(DatasetError::InvalidGeoJson(format!(
                    "expected a FeatureCollection, found '{}'",
                    other
                )))
            }
            None => {
                return Err(DatasetError::InvalidGeoJson(
                    "document has no 'type' member".to_string(),
                ))
            }
        }

        if !document.get("features").map(Value::is_array).unwrap_or(false) {
            return Err(DatasetError::InvalidGeoJson(
                "'features' must be an array".to_string(),
            ));
        }

        Ok(Self { document })
    }

    fn features(&self) -> &[Value] {
        self.document
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn feature_count(&self) -> usize {
        self.features().len()
    }

    /// `properties.id` of every feature that has one; numeric ids are rendered as text
    pub fn feature_ids(&self) -> Vec<String> {
        self.features()
            .iter()
            .filter_map(|f| f.get("properties")?.get("id"))
            .filter_map(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.features()
            .iter()
            .filter_map(|f| f.get("properties")?.get("id"))
            .any(|f| match f {
                Value::String(s) => s == id,
                Value::Number(n) => n.to_string() == id,
                _ => false,
            })
    }

    pub fn as_json(&self) -> &Value {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord::new("Mombasa", "1", 2019, 1_208_333),
            PopulationRecord::new("Kwale", "2", 2019, 866_820),
            PopulationRecord::new("Mombasa", "1", 2021, 1_250_000),
            PopulationRecord::new("Kwale", "2", 2021, 900_000),
        ])
    }

    #[test]
    fn test_years_newest_first() {
        assert_eq!(sample_table().years(), vec![2021, 2019]);
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(sample_table().year_bounds(), Some((2019, 2021)));
        assert_eq!(PopulationTable::default().year_bounds(), None);
    }

    #[test]
    fn test_has_previous_year() {
        let table = sample_table();

        assert!(table.has_previous_year(2020));
        assert!(!table.has_previous_year(2019));
        assert!(!table.has_previous_year(2021));
        assert!(!table.has_previous_year(i32::MIN));
    }

    #[test]
    fn test_counties_first_seen_order() {
        assert_eq!(sample_table().counties(), vec!["Mombasa", "Kwale"]);
    }

    #[test]
    fn test_geo_boundary_feature_ids() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"id": "1"}, "geometry": null},
                {"type": "Feature", "properties": {"id": 2}, "geometry": null},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        });
        let geo = GeoBoundary::from_value(doc).unwrap();

        assert_eq!(geo.feature_count(), 3);
        assert_eq!(geo.feature_ids(), vec!["1".to_string(), "2".to_string()]);
        assert!(geo.contains_id("2"));
        assert!(!geo.contains_id("47"));
    }

    #[test]
    fn test_geo_boundary_rejects_non_collection() {
        let doc = json!({"type": "Feature", "properties": {}});
        assert!(matches!(
            GeoBoundary::from_value(doc),
            Err(DatasetError::InvalidGeoJson(_))
        ));

        let doc = json!({"type": "FeatureCollection", "features": {}});
        assert!(GeoBoundary::from_value(doc).is_err());
    }
}
