//! Health check endpoints for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use rockfall_analysis::{BackendStats, ServiceHealth};
use rockfall_core::AnalysisState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Analysis backend health
    pub backend: BackendHealth,
    /// Current analysis gate state
    pub analysis_state: AnalysisState,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
}

/// Analysis backend health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendHealth {
    /// Backend name
    pub name: String,
    /// Backend status as reported by the backend
    pub health: ServiceHealth,
    /// Run counters, only on the detailed check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BackendStats>,
}

/// Readiness check response (simpler than health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Service readiness status
    pub ready: bool,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check endpoint for monitoring systems
///
/// Returns HTTP 200 with the backend status and uptime, or HTTP 503 when the
/// analysis backend reports itself unhealthy or cannot be reached.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2024-03-15T14:25:30Z",
///   "backend": {
///     "name": "simulated",
///     "health": { "healthy": true, "status": "ready", "in_flight": 0, "checked_at": "..." }
///   },
///   "analysis_state": "idle",
///   "uptime_seconds": 3600
/// }
/// ```
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    build_health(&state, false).await.map(Json)
}

/// Health check that also reports backend run counters
pub async fn detailed_health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    build_health(&state, true).await.map(Json)
}

/// Readiness check endpoint for Kubernetes-style health checks
///
/// Returns 200 OK if the analysis backend can accept runs
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let ready = state
        .workflow
        .backend()
        .health_check()
        .await
        .is_ok_and(|health| health.healthy);

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            ready,
            timestamp: chrono::Utc::now(),
        }),
    )
}

async fn build_health(state: &AppState, detailed: bool) -> Result<HealthResponse, StatusCode> {
    let backend = state.workflow.backend();

    let health = backend.health_check().await.map_err(|e| {
        error!("Backend health check failed: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    if !health.healthy {
        warn!(backend = backend.name(), status = %health.status, "Backend unhealthy");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let stats = if detailed {
        match backend.get_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!("Failed to read backend stats: {}", e);
                None
            }
        }
    } else {
        None
    };

    debug!(backend = backend.name(), "Health check completed");

    Ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        backend: BackendHealth {
            name: backend.name().to_string(),
            health,
            stats,
        },
        analysis_state: state.workflow.state(),
        uptime_seconds: state.uptime_seconds(),
    })
}
