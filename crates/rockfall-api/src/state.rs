//! Application state management

use rockfall_analysis::WorkflowController;
use rockfall_core::context_error::{Result, ResultExt};
use rockfall_core::{Config, context_error};
use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Dashboard workflow
    pub workflow: Arc<WorkflowController>,
    /// When the server started
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state with the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error if the configured analysis backend is unknown.
    pub fn new(config: Config) -> Result<Self> {
        let workflow =
            WorkflowController::from_config(&config).with_context(|| "Failed to build workflow")?;
        Ok(Self::with_workflow(config, Arc::new(workflow)))
    }

    /// Create application state around an existing workflow
    #[must_use]
    pub fn with_workflow(config: Config, workflow: Arc<WorkflowController>) -> Self {
        Self {
            config,
            workflow,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Check if the application is properly configured
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        self.config
            .validate()
            .map_err(|e| context_error!("Invalid configuration: {}", e))?;

        if self.config.api.enable_cors && self.config.api.cors_origins.is_empty() {
            return Err(context_error!(
                "api.cors_origins must list at least one origin when CORS is enabled"
            ));
        }

        Ok(())
    }
}
