//! Data Loader
//!
//! Reads the population CSV and the county boundary GeoJSON from disk.
//! Both resources are loaded once at startup; a missing file is fatal.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::error::{DatasetError, DatasetResult, Resource};
use super::types::{GeoBoundary, PopulationRecord, PopulationTable};

/// One CSV row, as laid out in the source file
#[derive(Debug, Deserialize)]
struct CsvRow {
    counties: String,
    id: String,
    year: i32,
    population: u64,
}

impl From<CsvRow> for PopulationRecord {
    fn from(row: CsvRow) -> Self {
        PopulationRecord {
            county: row.counties,
            year: row.year,
            population: row.population,
            id: row.id,
        }
    }
}

/// Load the population table from a CSV file with a
/// `counties,id,year,population` header (any column order).
pub fn load_population_table(path: impl AsRef<Path>) -> DatasetResult<PopulationTable> {
    let path = path.as_ref();
    let file = open_resource(path, Resource::PopulationTable)?;
    let table = parse_population_csv(BufReader::new(file))?;

    tracing::debug!(path = %path.display(), records = table.len(), "Loaded population table");
    Ok(table)
}

/// Parse population rows from any reader
///
/// Rows with missing columns or non-numeric year/population are rejected
/// rather than coerced.
pub fn parse_population_csv<R: Read>(reader: R) -> DatasetResult<PopulationTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.map_err(row_error)?;
        records.push(PopulationRecord::from(row));
    }

    Ok(PopulationTable::new(records))
}

/// Load the county boundary document from a GeoJSON file
pub fn load_geo_boundaries(path: impl AsRef<Path>) -> DatasetResult<GeoBoundary> {
    let path = path.as_ref();
    let file = open_resource(path, Resource::GeoBoundaries)?;
    let document: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    let boundaries = GeoBoundary::from_value(document)?;

    tracing::debug!(
        path = %path.display(),
        features = boundaries.feature_count(),
        "Loaded county boundaries"
    );
    Ok(boundaries)
}

fn open_resource(path: &Path, resource: Resource) -> DatasetResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DatasetError::ResourceNotFound {
            resource,
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io(e),
    })
}

fn row_error(err: csv::Error) -> DatasetError {
    let malformed = match err.kind() {
        csv::ErrorKind::Deserialize { pos, err: de } => Some((line_of(pos), de.to_string())),
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => Some((
            line_of(pos),
            format!("expected {} fields, found {}", expected_len, len),
        )),
        _ => None,
    };

    match malformed {
        Some((line, message)) => DatasetError::MalformedRow { line, message },
        None => DatasetError::Csv(err),
    }
}

fn line_of(pos: &Option<csv::Position>) -> u64 {
    pos.as_ref().map(|p| p.line()).unwrap_or(0)
}

/// Everything the dashboard reads: the table, the boundaries, and where they came from
///
/// Immutable after load; shared behind an `Arc` by the HTTP layer.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub table: PopulationTable,
    pub boundaries: GeoBoundary,
    pub population_path: PathBuf,
    pub boundaries_path: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Load both resources, failing fast on the first missing one
    pub fn load(
        population_path: impl AsRef<Path>,
        boundaries_path: impl AsRef<Path>,
    ) -> DatasetResult<Self> {
        let population_path = population_path.as_ref().to_path_buf();
        let boundaries_path = boundaries_path.as_ref().to_path_buf();

        let table = load_population_table(&population_path)?;
        let boundaries = load_geo_boundaries(&boundaries_path)?;

        let dataset = Self {
            table,
            boundaries,
            population_path,
            boundaries_path,
            loaded_at: Utc::now(),
        };

        let unmatched = dataset.unmatched_ids();
        if !unmatched.is_empty() {
            tracing::warn!(
                count = unmatched.len(),
                ids = ?unmatched,
                "Population records without a matching boundary feature"
            );
        }

        tracing::info!(
            records = dataset.table.len(),
            counties = dataset.table.counties().len(),
            years = dataset.table.years().len(),
            features = dataset.boundaries.feature_count(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Build a dataset from already-parsed parts
    pub fn from_parts(table: PopulationTable, boundaries: GeoBoundary) -> Self {
        Self {
            table,
            boundaries,
            population_path: PathBuf::new(),
            boundaries_path: PathBuf::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Distinct record ids that have no feature in the boundary document
    pub fn unmatched_ids(&self) -> Vec<String> {
        let mut unmatched: Vec<String> = self
            .table
            .records()
            .iter()
            .filter(|r| !self.boundaries.contains_id(&r.id))
            .map(|r| r.id.clone())
            .collect();
        unmatched.sort();
        unmatched.dedup();
        unmatched
    }
}
