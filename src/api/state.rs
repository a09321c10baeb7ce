//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks; the dataset is
//! never written after startup.

use std::sync::Arc;
use std::time::Instant;

use crate::config::DashboardConfig;
use crate::dataset::Dataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Population table and county boundaries, loaded once
    pub dataset: Arc<Dataset>,
    /// Dashboard settings (threshold, default theme, title)
    pub settings: Arc<DashboardConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Dataset, settings: DashboardConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            settings: Arc::new(settings),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
