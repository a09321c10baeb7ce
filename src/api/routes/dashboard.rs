//! Dashboard Routes
//!
//! - GET /api/v1/dashboard?year=&theme= - Full page model for one selection

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SelectionQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{build_dashboard, DashboardView, Selection};

/// GET /api/v1/dashboard
///
/// Recomputes every panel for the requested year and theme. Missing
/// parameters fall back to the newest year and the configured theme.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> ApiResult<Json<DashboardView>> {
    let selection = Selection::resolve(
        &state.dataset.table,
        query.year,
        query.theme.as_deref(),
        state.settings.default_theme,
    )?;

    Ok(Json(build_dashboard(
        &state.dataset,
        selection,
        &state.settings,
    )))
}
