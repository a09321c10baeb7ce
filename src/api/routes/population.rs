//! Population Routes
//!
//! Raw metrics endpoints backing the dashboard panels.
//!
//! - GET /api/v1/years - Selectable years, newest first
//! - GET /api/v1/themes - Selectable color themes
//! - GET /api/v1/population?year= - Records of a year, largest first
//! - GET /api/v1/deltas?year= - Year-over-year change per county
//! - GET /api/v1/migration?year=&threshold= - Inbound/outbound shares

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    DeltaResponse, MigrationQuery, MigrationResponse, PopulationResponse, ThemesResponse,
    YearQuery, YearsResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::metrics::{
    classify_migration, compute_year_over_year_delta, distinct_years, select_year,
    sort_by_population_descending, year_bounds,
};
use crate::theme::ColorTheme;

/// GET /api/v1/years
pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    let table = &state.dataset.table;
    let bounds = year_bounds(table);

    Json(YearsResponse {
        years: distinct_years(table),
        min: bounds.map(|b| b.0),
        max: bounds.map(|b| b.1),
    })
}

/// GET /api/v1/themes
pub async fn list_themes(State(state): State<Arc<AppState>>) -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: ColorTheme::all().to_vec(),
        default: state.settings.default_theme,
    })
}

/// GET /api/v1/population
///
/// A year with no records yields an empty list rather than an error.
pub async fn get_population(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Json<PopulationResponse>> {
    let year = year_or_newest(&state, query.year)?;
    let records = sort_by_population_descending(select_year(&state.dataset.table, year));

    Ok(Json(PopulationResponse {
        year,
        total: records.len(),
        records,
    }))
}

/// GET /api/v1/deltas
pub async fn get_deltas(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Json<DeltaResponse>> {
    let table = &state.dataset.table;
    let year = year_or_newest(&state, query.year)?;

    Ok(Json(DeltaResponse {
        year,
        has_previous_year: table.has_previous_year(year),
        deltas: compute_year_over_year_delta(table, year),
    }))
}

/// GET /api/v1/migration
pub async fn get_migration(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MigrationQuery>,
) -> ApiResult<Json<MigrationResponse>> {
    let year = year_or_newest(&state, query.year)?;
    let threshold = query
        .threshold
        .unwrap_or(state.settings.migration_threshold);

    let deltas = compute_year_over_year_delta(&state.dataset.table, year);

    Ok(Json(MigrationResponse {
        year,
        summary: classify_migration(&deltas, threshold),
    }))
}

fn year_or_newest(state: &AppState, year: Option<i32>) -> ApiResult<i32> {
    match year {
        Some(y) => Ok(y),
        None => year_bounds(&state.dataset.table)
            .map(|(_, max)| max)
            .ok_or_else(|| ApiError::NotFound("The population table is empty".to_string())),
    }
}
