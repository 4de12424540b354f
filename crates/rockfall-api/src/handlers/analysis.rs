//! Analysis gate endpoints

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use rockfall_analysis::{CancelOutcome, GateSnapshot, ResetOutcome, StartOutcome};
use std::sync::Arc;
use tracing::info;

/// Current gate state, timestamps, last failure and report
pub async fn get_analysis(State(state): State<Arc<AppState>>) -> Json<GateSnapshot> {
    Json(state.workflow.analysis())
}

/// Start an analysis run
///
/// Returns `202 Accepted` when a run began. Every other outcome leaves the
/// gate untouched and is reported with `409 Conflict`.
pub async fn start_analysis(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<StartOutcome>) {
    let outcome = state.workflow.start();
    let status = if outcome.is_started() {
        StatusCode::ACCEPTED
    } else {
        info!(?outcome, "Start request refused");
        StatusCode::CONFLICT
    };
    (status, Json(outcome))
}

/// Abandon the run in flight
pub async fn cancel_analysis(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<CancelOutcome>) {
    let outcome = state.workflow.cancel();
    let status = match outcome {
        CancelOutcome::Cancelled { .. } => StatusCode::OK,
        CancelOutcome::NotRunning { .. } => StatusCode::CONFLICT,
    };
    (status, Json(outcome))
}

/// Clear both slots and return to idle
pub async fn reset_analysis(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ResetOutcome>) {
    let outcome = state.workflow.reset();
    let status = match outcome {
        ResetOutcome::Reset { .. } => StatusCode::OK,
        ResetOutcome::Running { .. } => StatusCode::CONFLICT,
    };
    (status, Json(outcome))
}
