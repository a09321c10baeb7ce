//! Kenpop Dashboard
//!
//! Turns an explicit [`Selection`] into a [`DashboardView`]. The HTTP layer
//! resolves a selection from each request and calls [`build_dashboard`];
//! there is no session state.

pub mod selection;
pub mod view;

pub use selection::{Selection, SelectionError};
pub use view::{
    build_dashboard, DashboardView, GainsLosses, MetricCard, MigrationPanel, RankedRow,
    RankedTable,
};
