//! The analysis gate state machine
//!
//! ```text
//!   Idle --start (both inputs)--> Running --completion--> Done
//!    ^                              |                      |
//!    +------ cancel / failure ------+                      |
//!    +------------------------ reset ----------------------+
//! ```
//!
//! The gate itself is synchronous. Scheduling the completion is the
//! controller's job; the gate only accepts a completion whose run id matches
//! the run it is currently waiting on.

use crate::backend::AnalysisReport;
use crate::error::AnalysisError;
use crate::intake::IntakePair;
use chrono::{DateTime, Utc};
use rockfall_core::{AnalysisState, IntakeKind};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Result of a start request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StartOutcome {
    /// A new run began
    Started {
        /// Identifier of the new run
        run_id: Uuid,
    },
    /// At least one input is missing; nothing changed
    NotReady {
        /// Empty slots
        missing: Vec<IntakeKind>,
    },
    /// A run is already in flight; nothing changed
    AlreadyRunning {
        /// Identifier of the run in flight
        run_id: Uuid,
    },
    /// Results are already showing; nothing changed
    AlreadyComplete,
}

impl StartOutcome {
    /// Whether a new run began
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Result of a cancel request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CancelOutcome {
    /// The run in flight was abandoned
    Cancelled {
        /// Identifier of the abandoned run
        run_id: Uuid,
    },
    /// No run was in flight
    NotRunning {
        /// Current state
        state: AnalysisState,
    },
}

/// Result of a reset request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResetOutcome {
    /// Gate is idle and both slots are empty
    Reset {
        /// State before the reset
        previous: AnalysisState,
    },
    /// Refused; a run is in flight
    Running {
        /// Identifier of the run in flight
        run_id: Uuid,
    },
}

/// Result of delivering a completion to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The completion belonged to the current run and moved the gate
    Applied(AnalysisState),
    /// The run was cancelled or superseded; the completion was dropped
    Stale,
}

/// Why the last run failed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunFailure {
    /// Run that failed
    pub run_id: Uuid,
    /// Machine-readable error code
    pub code: &'static str,
    /// Error message
    pub message: String,
    /// Whether starting again without new inputs could succeed
    pub retryable: bool,
}

impl RunFailure {
    fn new(run_id: Uuid, error: &AnalysisError) -> Self {
        Self {
            run_id,
            code: error.code(),
            message: error.to_string(),
            retryable: error.is_retryable(),
        }
    }
}

/// Point-in-time view of the gate
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GateSnapshot {
    /// Current state
    pub state: AnalysisState,
    /// Current or most recent run
    pub run_id: Option<Uuid>,
    /// When that run started
    pub started_at: Option<DateTime<Utc>>,
    /// When that run completed
    pub completed_at: Option<DateTime<Utc>>,
    /// Failure of the most recent run, if it failed
    pub last_error: Option<RunFailure>,
    /// Report of the completed run
    pub report: Option<AnalysisReport>,
}

#[derive(Debug, Clone)]
struct RunRecord {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Idle / Running / Done state machine guarding the analysis
#[derive(Debug, Clone, Default)]
pub struct AnalysisGate {
    state: AnalysisState,
    run: Option<RunRecord>,
    last_error: Option<RunFailure>,
    report: Option<AnalysisReport>,
}

impl AnalysisGate {
    /// Create an idle gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub const fn state(&self) -> AnalysisState {
        self.state
    }

    /// Identifier of the run in flight
    pub fn running_run_id(&self) -> Option<Uuid> {
        match self.state {
            AnalysisState::Running => self.run.as_ref().map(|run| run.run_id),
            AnalysisState::Idle | AnalysisState::Done => None,
        }
    }

    /// Begin a run if both inputs are present and the gate is idle
    ///
    /// Refusals leave the gate untouched.
    pub fn start(&mut self, intake: &IntakePair) -> StartOutcome {
        match self.state {
            AnalysisState::Running => {
                let run_id = self.run.as_ref().map(|run| run.run_id).unwrap_or_default();
                debug!(%run_id, "Start ignored, run already in flight");
                StartOutcome::AlreadyRunning { run_id }
            }
            AnalysisState::Done => {
                debug!("Start ignored, results already showing");
                StartOutcome::AlreadyComplete
            }
            AnalysisState::Idle if !intake.is_ready() => {
                let missing = intake.missing();
                debug!(?missing, "Start ignored, inputs missing");
                StartOutcome::NotReady { missing }
            }
            AnalysisState::Idle => {
                let run_id = Uuid::new_v4();
                self.state = AnalysisState::Running;
                self.run = Some(RunRecord {
                    run_id,
                    started_at: Utc::now(),
                    completed_at: None,
                });
                self.last_error = None;
                self.report = None;
                info!(%run_id, "Analysis started");
                StartOutcome::Started { run_id }
            }
        }
    }

    /// Deliver the result of a run
    ///
    /// Success moves `Running -> Done`; failure moves `Running -> Idle` and
    /// keeps the error for the snapshot.
    pub fn complete(
        &mut self,
        run_id: Uuid,
        result: Result<AnalysisReport, AnalysisError>,
    ) -> CompletionOutcome {
        if self.running_run_id() != Some(run_id) {
            debug!(%run_id, state = %self.state, "Dropping stale completion");
            return CompletionOutcome::Stale;
        }

        if let Some(run) = self.run.as_mut() {
            run.completed_at = Some(Utc::now());
        }

        match result {
            Ok(report) => {
                self.state = AnalysisState::Done;
                self.report = Some(report);
                info!(%run_id, "Analysis complete");
            }
            Err(error) => {
                self.state = AnalysisState::Idle;
                info!(%run_id, %error, "Analysis failed");
                self.last_error = Some(RunFailure::new(run_id, &error));
            }
        }

        CompletionOutcome::Applied(self.state)
    }

    /// Abandon the run in flight
    pub fn cancel(&mut self) -> CancelOutcome {
        match self.running_run_id() {
            Some(run_id) => {
                self.state = AnalysisState::Idle;
                info!(%run_id, "Analysis cancelled");
                CancelOutcome::Cancelled { run_id }
            }
            None => CancelOutcome::NotRunning { state: self.state },
        }
    }

    /// Return to an empty, idle workflow
    ///
    /// Clears both intake slots along with the previous run. Refused while a
    /// run is in flight.
    pub fn reset(&mut self, intake: &mut IntakePair) -> ResetOutcome {
        if let Some(run_id) = self.running_run_id() {
            debug!(%run_id, "Reset refused, run in flight");
            return ResetOutcome::Running { run_id };
        }

        let previous = self.state;
        *self = Self::new();
        intake.clear_all();
        info!(%previous, "Workflow reset");
        ResetOutcome::Reset { previous }
    }

    /// Serializable view of the gate
    pub fn snapshot(&self) -> GateSnapshot {
        GateSnapshot {
            state: self.state,
            run_id: self.run.as_ref().map(|run| run.run_id),
            started_at: self.run.as_ref().map(|run| run.started_at),
            completed_at: self.run.as_ref().and_then(|run| run.completed_at),
            last_error: self.last_error.clone(),
            report: self.report.clone(),
        }
    }
}
