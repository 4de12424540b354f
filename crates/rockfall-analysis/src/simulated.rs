//! Simulated analysis backend
//!
//! Waits a fixed delay and reports success. The delay does not depend on the
//! inputs; nothing is read from the files.

use crate::backend::{AnalysisBackend, AnalysisReport, AnalysisRequest, BackendStats, ServiceHealth};
use crate::error::{AnalysisError, AnalysisResult};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

/// Default processing delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Backend that completes after a fixed delay
#[derive(Debug)]
pub struct SimulatedAnalysis {
    /// Processing delay
    delay: Duration,

    /// Failure message, when configured to fail
    failure: Option<String>,

    /// Statistics
    stats: Mutex<BackendStats>,
}

impl SimulatedAnalysis {
    /// Create a backend with the default delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            failure: None,
            stats: Mutex::new(BackendStats::default()),
        }
    }

    /// Set processing delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configure to fail every run after the delay
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Configured processing delay
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

/// Decrements the in-flight counter when a run ends, cancelled or not
struct InFlight<'a>(&'a Mutex<BackendStats>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut stats = self.0.lock();
        stats.in_flight = stats.in_flight.saturating_sub(1);
    }
}

#[async_trait]
impl AnalysisBackend for SimulatedAnalysis {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisReport> {
        {
            let mut stats = self.stats.lock();
            stats.total_runs += 1;
            stats.in_flight += 1;
        }
        let _in_flight = InFlight(&self.stats);

        debug!(
            run_id = %request.run_id,
            imagery = %request.imagery.name,
            sensor_readings = %request.sensor_readings.name,
            delay = ?self.delay,
            "Simulating analysis"
        );

        let started = Instant::now();
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if let Some(message) = &self.failure {
            warn!(run_id = %request.run_id, "Simulated analysis failing: {}", message);
            self.stats.lock().failed += 1;
            return Err(AnalysisError::processing_failed(message));
        }

        {
            let mut stats = self.stats.lock();
            stats.successful += 1;
            stats.avg_processing_time_ms = (stats.avg_processing_time_ms
                * (stats.successful - 1) as f64
                + elapsed_ms as f64)
                / stats.successful as f64;
        }

        Ok(AnalysisReport {
            run_id: request.run_id,
            backend: self.name().to_string(),
            imagery: request.imagery.name.clone(),
            sensor_readings: request.sensor_readings.name.clone(),
            processing_time_ms: elapsed_ms,
            completed_at: Utc::now(),
        })
    }

    async fn health_check(&self) -> AnalysisResult<ServiceHealth> {
        let mut health = if self.failure.is_some() {
            ServiceHealth::unhealthy("Simulated backend configured to fail")
        } else {
            ServiceHealth::healthy("Simulated backend operational")
        };
        health.in_flight = self.stats.lock().in_flight;
        Ok(health)
    }

    async fn get_stats(&self) -> AnalysisResult<BackendStats> {
        Ok(self.stats.lock().clone())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
