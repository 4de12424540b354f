//! View switch and results dashboard endpoints
//!
//! The individual datasets are only served once an analysis has completed;
//! before that the dashboard is not visible and the request is a conflict.

use crate::handlers::error::{HandlerError, error_with_details};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use rockfall_analysis::display::{self, AlertPanel, ChartSeries, TrendPanel};
use rockfall_analysis::Screen;
use rockfall_core::AnalysisState;
use rockfall_core::fixtures::{MetricCard, PerformanceIndicator, RiskZone};
use rockfall_core::heatmap::{HeatMap, RiskDistribution};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters accepted by heat map renders
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SeedQuery {
    /// Fixed seed for a reproducible heat map
    pub seed: Option<u64>,
}

/// Monitoring grid and performance strip
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    /// Monitoring cards
    pub metric_cards: &'static [MetricCard],
    /// System performance indicators
    pub performance: &'static [PerformanceIndicator],
}

/// Heat map with its level counts
#[derive(Debug, Clone, Serialize)]
pub struct HeatMapResponse {
    /// The rendered grid
    pub heatmap: HeatMap,
    /// Cells per risk level
    pub distribution: RiskDistribution,
}

/// The visible screen
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeedQuery>,
) -> Json<Screen> {
    Json(state.workflow.screen(query.seed))
}

/// Monitoring grid and system performance
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetricsResponse>, HandlerError> {
    require_results(&state)?;
    Ok(Json(MetricsResponse {
        metric_cards: display::metric_cards(),
        performance: display::performance_indicators(),
    }))
}

/// Monitored risk zones
pub async fn get_zones(
    State(state): State<Arc<AppState>>,
) -> Result<Json<&'static [RiskZone]>, HandlerError> {
    require_results(&state)?;
    Ok(Json(display::risk_zones()))
}

/// Alerts and the unacknowledged summary
pub async fn get_alerts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AlertPanel>, HandlerError> {
    require_results(&state)?;
    Ok(Json(display::alerts()))
}

/// Seven-day trend data and highlights
pub async fn get_trends(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TrendPanel>, HandlerError> {
    require_results(&state)?;
    Ok(Json(display::trends()))
}

/// Chart series
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChartSeries>>, HandlerError> {
    require_results(&state)?;
    Ok(Json(display::charts()))
}

/// A freshly drawn heat map
pub async fn get_heatmap(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeedQuery>,
) -> Result<Json<HeatMapResponse>, HandlerError> {
    require_results(&state)?;
    let heatmap = state.workflow.heatmap(query.seed);
    let distribution = heatmap.distribution();
    Ok(Json(HeatMapResponse {
        heatmap,
        distribution,
    }))
}

fn require_results(state: &AppState) -> Result<(), HandlerError> {
    match state.workflow.state() {
        AnalysisState::Done => Ok(()),
        current => Err(error_with_details(
            StatusCode::CONFLICT,
            "RESULTS_NOT_READY",
            "Results are available once an analysis has completed",
            serde_json::json!({ "state": current }),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use rockfall_core::Config;

    #[tokio::test]
    async fn test_results_refused_before_analysis() {
        let state = Arc::new(AppState::new(Config::default()).unwrap());

        let Err((status, Json(body))) = get_alerts(State(Arc::clone(&state))).await else {
            panic!("expected results to be refused while idle");
        };
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "RESULTS_NOT_READY");
        assert_eq!(body.details, Some(serde_json::json!({ "state": "idle" })));
    }

    #[tokio::test]
    async fn test_view_is_intake_while_idle() {
        let state = Arc::new(AppState::new(Config::default()).unwrap());

        let Json(screen) = get_view(State(state), Query(SeedQuery::default())).await;
        assert_eq!(screen.view(), rockfall_analysis::View::Intake);
    }
}
