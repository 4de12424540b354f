//! API route definitions

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use http::{HeaderValue, StatusCode};
use rockfall_analysis::display;
use rockfall_core::config::ApiConfig;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Build intake routes
pub fn intake_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/intake", get(handlers::intake::get_intake))
        .route(
            "/api/intake/:kind",
            post(handlers::intake::upload_file).delete(handlers::intake::clear_slot),
        )
}

/// Build analysis gate routes
pub fn analysis_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/analysis", get(handlers::analysis::get_analysis))
        .route(
            "/api/analysis/start",
            post(handlers::analysis::start_analysis),
        )
        .route(
            "/api/analysis/cancel",
            post(handlers::analysis::cancel_analysis),
        )
        .route(
            "/api/analysis/reset",
            post(handlers::analysis::reset_analysis),
        )
}

/// Build view and results routes
pub fn results_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/view", get(handlers::results::get_view))
        .route("/api/results/metrics", get(handlers::results::get_metrics))
        .route("/api/results/zones", get(handlers::results::get_zones))
        .route("/api/results/alerts", get(handlers::results::get_alerts))
        .route("/api/results/trends", get(handlers::results::get_trends))
        .route("/api/results/charts", get(handlers::results::get_charts))
        .route("/api/results/heatmap", get(handlers::results::get_heatmap))
        // Dashboard payloads are the only large responses
        .layer(CompressionLayer::new())
}

/// Build health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route(
            "/health/detailed",
            get(handlers::health::detailed_health_check),
        )
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root_endpoint))
        .merge(intake_routes())
        .merge(analysis_routes())
        .merge(results_routes())
        .merge(health_routes())
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
}

/// CORS policy from configuration
///
/// `"*"` anywhere in the origin list allows any origin. Origins that are not
/// valid header values are skipped.
pub fn cors_layer(api: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if api.cors_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = api
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (StatusCode, axum::Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "AI Rockfall Prediction System",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
        "system_status": display::system_status(),
        "endpoints": {
            "intake": "/api/intake",
            "analysis": "/api/analysis",
            "view": "/api/view",
            "results": "/api/results",
            "health": "/health"
        }
    }))
}
