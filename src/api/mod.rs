//! Kenpop HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard shell
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard?year=&theme=` - Full page model
//!
//! ## Population
//! - `GET /api/v1/years` - Selectable years
//! - `GET /api/v1/themes` - Selectable themes
//! - `GET /api/v1/population?year=` - Ranked records of a year
//! - `GET /api/v1/deltas?year=` - Year-over-year change
//! - `GET /api/v1/migration?year=&threshold=` - Migration shares
//!
//! ## Charts
//! - `GET /api/v1/charts/choropleth?year=&theme=` - Plotly figure
//! - `GET /api/v1/charts/heatmap?theme=` - Vega-Lite spec
//! - `GET /api/v1/boundaries` - County boundary GeoJSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use kenpop::api::{serve, AppState};
//! use kenpop::config::Config;
//! use kenpop::dataset::Dataset;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let dataset = Dataset::load(&config.data.population_path, &config.data.boundaries_path)?;
//!
//!     let state = AppState::new(dataset, config.dashboard.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use crate::config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        // Population metrics
        .route("/years", get(routes::population::list_years))
        .route("/themes", get(routes::population::list_themes))
        .route("/population", get(routes::population::get_population))
        .route("/deltas", get(routes::population::get_deltas))
        .route("/migration", get(routes::population::get_migration))
        // Charts
        .route("/charts/choropleth", get(routes::charts::choropleth_chart))
        .route("/charts/heatmap", get(routes::charts::heatmap_chart))
        .route("/boundaries", get(routes::charts::boundaries));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Kenpop dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Kenpop dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dataset::{Dataset, GeoBoundary, PopulationRecord, PopulationTable};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let table = PopulationTable::new(vec![
            PopulationRecord::new("A", "1", 2019, 100_000),
            PopulationRecord::new("C", "3", 2019, 300_000),
            PopulationRecord::new("A", "1", 2020, 160_000),
            PopulationRecord::new("C", "3", 2020, 240_000),
            PopulationRecord::new("A", "1", 2021, 170_000),
            PopulationRecord::new("B", "2", 2021, 5_000),
            PopulationRecord::new("C", "3", 2021, 250_000),
        ]);
        let boundaries = GeoBoundary::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"id": "1"}, "geometry": null},
                {"type": "Feature", "properties": {"id": "2"}, "geometry": null},
                {"type": "Feature", "properties": {"id": "3"}, "geometry": null}
            ]
        }))
        .unwrap();

        let state = AppState::new(
            Dataset::from_parts(table, boundaries),
            DashboardConfig::default(),
        );
        build_router(state)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get("/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get("/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 7);
        assert_eq!(body["boundary_features"], 3);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_years() {
        let (status, body) = get("/api/v1/years").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], json!([2021, 2020, 2019]));
        assert_eq!(body["min"], 2019);
    }

    #[tokio::test]
    async fn test_themes() {
        let (status, body) = get("/api/v1/themes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["themes"].as_array().unwrap().len(), 10);
        assert_eq!(body["default"], "blues");
    }

    #[tokio::test]
    async fn test_dashboard_default_selection() {
        let (status, body) = get("/api/v1/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selection"]["year"], 2021);
        assert_eq!(body["selection"]["theme"], "blues");
    }

    #[tokio::test]
    async fn test_dashboard_selected_year() {
        let (status, body) = get("/api/v1/dashboard?year=2020&theme=inferno").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gains_losses"]["top"]["label"], "A");
        assert_eq!(body["gains_losses"]["top"]["delta"], "60 K");
        assert_eq!(body["migration"]["summary"]["inbound_percent"], 50);
        assert_eq!(body["heatmap"]["encoding"]["color"]["scale"]["scheme"], "inferno");
    }

    #[tokio::test]
    async fn test_dashboard_baseline_year() {
        let (status, body) = get("/api/v1/dashboard?year=2019").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gains_losses"]["top"]["label"], "-");
        assert_eq!(body["migration"]["available"], false);
    }

    #[tokio::test]
    async fn test_dashboard_unknown_year() {
        let (status, body) = get("/api/v1/dashboard?year=1999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_dashboard_unknown_theme() {
        let (status, body) = get("/api/v1/dashboard?theme=jet").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_population_absent_year_is_empty() {
        let (status, body) = get("/api/v1/population?year=1999").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert_eq!(body["records"], json!([]));
    }

    #[tokio::test]
    async fn test_population_ranked() {
        let (_, body) = get("/api/v1/population?year=2021").await;

        assert_eq!(body["records"][0]["county"], "C");
        assert_eq!(body["records"][2]["county"], "B");
    }

    #[tokio::test]
    async fn test_deltas_new_county() {
        let (status, body) = get("/api/v1/deltas?year=2021").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_previous_year"], true);
        let deltas = body["deltas"].as_array().unwrap();
        let b = deltas.iter().find(|d| d["county"] == "B").unwrap();
        assert_eq!(b["population_difference"], 5000);
    }

    #[tokio::test]
    async fn test_migration_custom_threshold() {
        let (status, body) = get("/api/v1/migration?year=2020&threshold=70000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["threshold"], 70_000);
        assert_eq!(body["inbound_count"], 0);
        assert_eq!(body["outbound_count"], 0);
    }

    #[tokio::test]
    async fn test_deltas_lowest_year_has_no_previous() {
        let (status, body) = get("/api/v1/deltas?year=-2147483648").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_previous_year"], false);
        assert_eq!(body["deltas"], json!([]));
    }

    #[tokio::test]
    async fn test_migration_max_threshold() {
        let (status, body) = get("/api/v1/migration?year=2020&threshold=18446744073709551615").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["county_count"], 2);
        assert_eq!(body["inbound_count"], 0);
        assert_eq!(body["outbound_count"], 0);
    }

    #[tokio::test]
    async fn test_choropleth_chart() {
        let (status, body) = get("/api/v1/charts/choropleth?year=2020").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["zmax"], 240_000);
    }

    #[tokio::test]
    async fn test_heatmap_bad_theme() {
        let (status, _) = get("/api/v1/charts/heatmap?theme=sepia").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_boundaries() {
        let (status, body) = get("/api/v1/boundaries").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "FeatureCollection");
    }
}
