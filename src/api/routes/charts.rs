//! Chart Routes
//!
//! Individual chart documents, for embedding a single panel.
//!
//! - GET /api/v1/charts/choropleth?year=&theme= - Plotly figure
//! - GET /api/v1/charts/heatmap?theme= - Vega-Lite spec
//! - GET /api/v1/boundaries - County boundary GeoJSON

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::{SelectionQuery, ThemeQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{make_choropleth, make_heatmap};
use crate::dashboard::Selection;
use crate::metrics::select_year;
use crate::theme::ColorTheme;

/// GET /api/v1/charts/choropleth
pub async fn choropleth_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> ApiResult<Json<Value>> {
    let dataset = &state.dataset;
    let selection = Selection::resolve(
        &dataset.table,
        query.year,
        query.theme.as_deref(),
        state.settings.default_theme,
    )?;

    let records = select_year(&dataset.table, selection.year);
    Ok(Json(make_choropleth(
        &records,
        &dataset.boundaries,
        selection.theme,
    )))
}

/// GET /api/v1/charts/heatmap
pub async fn heatmap_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThemeQuery>,
) -> ApiResult<Json<Value>> {
    let theme = match query.theme.as_deref() {
        Some(name) => name
            .parse::<ColorTheme>()
            .map_err(|e| ApiError::Validation(e.to_string()))?,
        None => state.settings.default_theme,
    };

    Ok(Json(make_heatmap(&state.dataset.table, theme)))
}

/// GET /api/v1/boundaries
pub async fn boundaries(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.dataset.boundaries.as_json().clone())
}
