//! File intake, analysis gate and view switch for the rockfall dashboard
//!
//! The workflow is small: two intake slots must both hold a file before the
//! analysis gate will start a run, the run completes after a fixed delay, and
//! the visible screen flips from intake to results once it has.
//!
//! [`WorkflowController`] owns that state for one session and drives each run
//! on a spawned task through a pluggable [`AnalysisBackend`].

#![forbid(unsafe_code)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_precision_loss,
    clippy::return_self_not_must_use,
    clippy::significant_drop_tightening
)]

pub mod backend;
pub mod display;
pub mod error;
pub mod gate;
pub mod intake;
pub mod simulated;
pub mod view;
pub mod workflow;

pub use backend::{AnalysisBackend, AnalysisReport, AnalysisRequest, BackendStats, ServiceHealth};
pub use error::{AnalysisError, AnalysisResult};
pub use gate::{AnalysisGate, CancelOutcome, GateSnapshot, ResetOutcome, StartOutcome};
pub use intake::{IntakePair, IntakeSlot, IntakeSnapshot, IntakeSource, SlotSnapshot};
pub use rockfall_core::{AnalysisState, IntakeKind, SelectedFile};
pub use simulated::SimulatedAnalysis;
pub use view::{Screen, View};
pub use workflow::{WorkflowController, WorkflowEvent, WorkflowOptions};
