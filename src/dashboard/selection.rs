//! Dashboard selection state
//!
//! The year and theme a view is computed for. Each request carries its own
//! selection; nothing is remembered between requests.

use serde::Serialize;
use thiserror::Error;

use crate::dataset::PopulationTable;
use crate::theme::{ColorTheme, UnknownTheme};

/// Year and color theme chosen by the user
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub theme: ColorTheme,
}

/// Reasons a requested selection cannot be honored
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error(transparent)]
    UnknownTheme(#[from] UnknownTheme),

    #[error("Year {0} is not present in the dataset")]
    UnknownYear(i32),

    #[error("The population table is empty")]
    EmptyDataset,
}

impl Selection {
    pub fn new(year: i32, theme: ColorTheme) -> Self {
        Self { year, theme }
    }

    /// Resolve request parameters against the table
    ///
    /// A missing year defaults to the newest year in the data; a missing theme
    /// defaults to `default_theme`.
    pub fn resolve(
        table: &PopulationTable,
        year: Option<i32>,
        theme: Option<&str>,
        default_theme: ColorTheme,
    ) -> Result<Self, SelectionError> {
        let theme = match theme {
            Some(name) => name.parse()?,
            None => default_theme,
        };

        let year = match year {
            Some(y) if table.contains_year(y) => y,
            Some(y) => return Err(SelectionError::UnknownYear(y)),
            None => {
                table
                    .year_bounds()
                    .ok_or(SelectionError::EmptyDataset)?
                    .1
            }
        };

        Ok(Self { year, theme })
    }

    /// True when no earlier year exists to compare against
    pub fn is_baseline_year(&self, table: &PopulationTable) -> bool {
        table
            .year_bounds()
            .map(|(min, _)| self.year <= min)
            .unwrap_or(true)
    }
}
