//! Dataset error types
//!
//! Defines all errors that can occur while loading the population table and
//! the county boundary document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the data loader
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A required input file does not exist
    #[error("The file '{}' is not found ({resource})", path.display())]
    ResourceNotFound { resource: Resource, path: PathBuf },

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (bad quoting, unreadable header, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A population row could not be interpreted
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// Boundary document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Boundary document is JSON but not a GeoJSON FeatureCollection
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),
}

/// The two resources the dashboard needs at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    PopulationTable,
    GeoBoundaries,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::PopulationTable => write!(f, "population table"),
            Resource::GeoBoundaries => write!(f, "county boundaries"),
        }
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_file() {
        let err = DatasetError::ResourceNotFound {
            resource: Resource::PopulationTable,
            path: PathBuf::from("Mydata.csv"),
        };
        assert_eq!(
            err.to_string(),
            "The file 'Mydata.csv' is not found (population table)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
