//! Analysis backend trait and request/report types

use crate::error::{AnalysisError, AnalysisResult};
use crate::intake::IntakePair;
use crate::simulated::SimulatedAnalysis;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rockfall_core::SelectedFile;
use rockfall_core::config::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Core trait for analysis backend implementations
///
/// The workflow controller owns when a run starts and whether its result is
/// still wanted; a backend only turns one request into one report.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Process both inputs of one run
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisReport>;

    /// Check if the backend is healthy and ready
    async fn health_check(&self) -> AnalysisResult<ServiceHealth>;

    /// Get backend statistics
    async fn get_stats(&self) -> AnalysisResult<BackendStats>;

    /// Get backend name
    fn name(&self) -> &str;
}

/// Build the backend named in configuration
pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Arc<dyn AnalysisBackend>> {
    match config.backend.to_ascii_lowercase().as_str() {
        "simulated" | "mock" => Ok(Arc::new(SimulatedAnalysis::new().with_delay(
            Duration::from_millis(config.delay_ms),
        ))),
        other => Err(AnalysisError::backend_unavailable(other)),
    }
}

/// The inputs captured when a run starts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Run identifier
    pub run_id: Uuid,

    /// Drone imagery file
    pub imagery: SelectedFile,

    /// Sensor readings file
    pub sensor_readings: SelectedFile,

    /// When the run was requested
    pub requested_at: DateTime<Utc>,
}

impl AnalysisRequest {
    /// Create a request from two files
    pub fn new(run_id: Uuid, imagery: SelectedFile, sensor_readings: SelectedFile) -> Self {
        Self {
            run_id,
            imagery,
            sensor_readings,
            requested_at: Utc::now(),
        }
    }

    /// Capture the current inputs of an intake pair
    pub fn from_pair(run_id: Uuid, pair: &IntakePair) -> AnalysisResult<Self> {
        let (imagery, sensor_readings) = pair
            .inputs()
            .ok_or_else(|| AnalysisError::missing_input(pair.missing()))?;
        Ok(Self::new(run_id, imagery, sensor_readings))
    }
}

/// The outcome of a completed run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Run identifier
    pub run_id: Uuid,

    /// Backend that produced the report
    pub backend: String,

    /// Imagery file name
    pub imagery: String,

    /// Sensor readings file name
    pub sensor_readings: String,

    /// Time spent in the backend
    pub processing_time_ms: u64,

    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

/// Backend health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the backend is healthy
    pub healthy: bool,

    /// Status message
    pub status: String,

    /// Runs currently in flight
    pub in_flight: u64,

    /// Last health check timestamp
    pub checked_at: DateTime<Utc>,
}

impl ServiceHealth {
    /// Create a healthy status
    pub fn healthy(status: impl Into<String>) -> Self {
        Self {
            healthy: true,
            status: status.into(),
            in_flight: 0,
            checked_at: Utc::now(),
        }
    }

    /// Create an unhealthy status
    pub fn unhealthy(status: impl Into<String>) -> Self {
        Self {
            healthy: false,
            status: status.into(),
            in_flight: 0,
            checked_at: Utc::now(),
        }
    }
}

/// Backend run counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackendStats {
    /// Total runs handed to the backend
    pub total_runs: u64,
    /// Runs that produced a report
    pub successful: u64,
    /// Runs that failed
    pub failed: u64,
    /// Runs currently in flight
    pub in_flight: u64,
    /// Average processing time of successful runs
    pub avg_processing_time_ms: f64,
}
