//! HTTP server library for the rockfall prediction dashboard

#![forbid(unsafe_code)]

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::{Router, extract::DefaultBodyLimit};
use rockfall_core::Config;
use rockfall_core::context_error::Result;
use std::sync::Arc;
use tracing::info;

/// Multipart framing allowance on top of the largest accepted file
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the API router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the analysis backend is unknown or the application
/// state validation fails.
pub fn build_router(config: Config) -> Result<Router> {
    build_router_with_state(AppState::new(config)?)
}

/// Build the API router around prepared application state
///
/// # Errors
///
/// Returns an error if the application state validation fails.
pub fn build_router_with_state(app_state: AppState) -> Result<Router> {
    app_state.validate()?;

    let body_limit = usize::try_from(app_state.config.intake.max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);
    let cors = app_state
        .config
        .api
        .enable_cors
        .then(|| routes::cors_layer(&app_state.config.api));

    info!(
        body_limit,
        cors = cors.is_some(),
        backend = app_state.workflow.backend().name(),
        "Router configured"
    );

    let state = Arc::new(app_state);
    let mut app = routes::build_router().layer(DefaultBodyLimit::max(body_limit));
    if let Some(cors) = cors {
        app = app.layer(cors);
    }

    Ok(app.with_state(state))
}
