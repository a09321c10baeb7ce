//! Data Transfer Objects
//!
//! Query parameters and response bodies for the API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::PopulationRecord;
use crate::metrics::{MigrationSummary, PopulationDelta};
use crate::theme::ColorTheme;

// ============================================
// QUERY PARAMETERS
// ============================================

/// `?year=&theme=` for the dashboard and the choropleth
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// `?year=`; defaults to the newest year
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    #[serde(default)]
    pub year: Option<i32>,
}

/// `?theme=` for the heatmap
#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    pub theme: Option<String>,
}

/// `?year=&threshold=`
#[derive(Debug, Default, Deserialize)]
pub struct MigrationQuery {
    #[serde(default)]
    pub year: Option<i32>,
    /// Overrides the configured threshold
    #[serde(default)]
    pub threshold: Option<u64>,
}

// ============================================
// RESPONSES
// ============================================

/// Years available for selection
#[derive(Debug, Serialize)]
pub struct YearsResponse {
    /// Newest first
    pub years: Vec<i32>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Themes available for selection
#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<ColorTheme>,
    pub default: ColorTheme,
}

/// Records of one year, largest population first
#[derive(Debug, Serialize)]
pub struct PopulationResponse {
    pub year: i32,
    pub total: usize,
    pub records: Vec<PopulationRecord>,
}

/// Year-over-year deltas of one year, largest gain first
#[derive(Debug, Serialize)]
pub struct DeltaResponse {
    pub year: i32,
    /// Whether `year - 1` exists in the data at all
    pub has_previous_year: bool,
    pub deltas: Vec<PopulationDelta>,
}

/// Migration summary of one year
#[derive(Debug, Serialize)]
pub struct MigrationResponse {
    pub year: i32,
    #[serde(flatten)]
    pub summary: MigrationSummary,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub counties: usize,
    pub years: usize,
    pub boundary_features: usize,
    pub loaded_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: String,
}
