//! Workflow controller tying the intake pair, gate and backend together
//!
//! All mutable state sits behind one mutex that is never held across an
//! await. A started run is driven by its own task which races the backend
//! against a cancellation token and reports back by run id.

use crate::backend::{self, AnalysisBackend, AnalysisReport, AnalysisRequest};
use crate::error::{AnalysisError, AnalysisResult};
use crate::gate::{
    AnalysisGate, CancelOutcome, CompletionOutcome, GateSnapshot, ResetOutcome, StartOutcome,
};
use crate::intake::{IntakePair, IntakeSnapshot, IntakeSource, SlotSnapshot};
use crate::view::{IntakeView, ResultsView, Screen, View};
use parking_lot::Mutex;
use rockfall_core::config::{Config, HeatMapConfig};
use rockfall_core::heatmap::HeatMap;
use rockfall_core::{AnalysisState, IntakeKind, SelectedFile};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

/// Something observable changed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// A slot was filled, replaced or cleared
    SlotChanged {
        /// Slot
        kind: IntakeKind,
        /// New content
        file: Option<SelectedFile>,
        /// Both slots populated after the change
        ready: bool,
    },
    /// A run began
    RunStarted {
        /// Run identifier
        run_id: Uuid,
    },
    /// A run finished and results are visible
    RunCompleted {
        /// Run identifier
        run_id: Uuid,
    },
    /// A run failed and the gate is idle again
    RunFailed {
        /// Run identifier
        run_id: Uuid,
        /// Error code
        code: &'static str,
    },
    /// A run was cancelled
    RunCancelled {
        /// Run identifier
        run_id: Uuid,
    },
    /// The workflow was reset to empty
    Reset,
}

/// Mutable workflow state
#[derive(Debug)]
struct Workflow {
    intake: IntakePair,
    gate: AnalysisGate,
    cancel_token: Option<CancellationToken>,
}

/// Timing and sizing knobs
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Per-run deadline
    pub timeout: Option<Duration>,
    /// Event channel capacity
    pub event_capacity: usize,
    /// Heat map dimensions and seed
    pub heatmap: HeatMapConfig,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            event_capacity: 64,
            heatmap: HeatMapConfig::default(),
        }
    }
}

impl WorkflowOptions {
    /// Options from service configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.analysis.timeout_ms.map(Duration::from_millis),
            event_capacity: config.analysis.event_capacity,
            heatmap: config.heatmap.clone(),
        }
    }
}

/// Drives the intake, gate and backend of one dashboard session
pub struct WorkflowController {
    state: Arc<Mutex<Workflow>>,
    backend: Arc<dyn AnalysisBackend>,
    events: broadcast::Sender<WorkflowEvent>,
    options: WorkflowOptions,
}

impl std::fmt::Debug for WorkflowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowController")
            .field("backend", &self.backend.name())
            .field("state", &self.state())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl WorkflowController {
    /// Create a controller around an intake pair and a backend
    pub fn new(
        intake: IntakePair,
        backend: Arc<dyn AnalysisBackend>,
        options: WorkflowOptions,
    ) -> Self {
        let (events, _) = broadcast::channel(options.event_capacity.max(1));
        Self {
            state: Arc::new(Mutex::new(Workflow {
                intake,
                gate: AnalysisGate::new(),
                cancel_token: None,
            })),
            backend,
            events,
            options,
        }
    }

    /// Create a controller with the configured backend
    pub fn from_config(config: &Config) -> AnalysisResult<Self> {
        config.validate().map_err(rockfall_core::Error::from)?;
        let backend = backend::from_config(&config.analysis)?;
        info!(
            backend = backend.name(),
            delay_ms = config.analysis.delay_ms,
            timeout_ms = ?config.analysis.timeout_ms,
            policy = ?config.intake.policy,
            "Workflow controller configured"
        );
        Ok(Self::new(
            IntakePair::from_config(&config.intake),
            backend,
            WorkflowOptions::from_config(config),
        ))
    }

    /// The analysis backend
    pub fn backend(&self) -> &Arc<dyn AnalysisBackend> {
        &self.backend
    }

    /// Heat map settings
    pub const fn heatmap_config(&self) -> &HeatMapConfig {
        &self.options.heatmap
    }

    /// Receive workflow events from now on
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: WorkflowEvent) {
        // No receivers is fine
        let _ = self.events.send(event);
    }

    /// Put a file in a slot, replacing its previous content
    pub fn submit(&self, kind: IntakeKind, file: SelectedFile) -> AnalysisResult<SlotSnapshot> {
        self.offer(kind, [file], IntakeSource::Picker)
    }

    /// Hand a picker or drop batch to a slot; the first file is taken
    pub fn offer(
        &self,
        kind: IntakeKind,
        files: impl IntoIterator<Item = SelectedFile>,
        source: IntakeSource,
    ) -> AnalysisResult<SlotSnapshot> {
        let (snapshot, event) = {
            let mut workflow = self.state.lock();
            let taken = workflow
                .intake
                .slot_mut(kind)
                .offer(files, source)?
                .cloned();
            let ready = workflow.intake.is_ready();
            let snapshot = workflow.intake.slot(kind).snapshot();
            let event = taken.map(|file| WorkflowEvent::SlotChanged {
                kind,
                file: Some(file),
                ready,
            });
            (snapshot, event)
        };

        if let Some(event) = event {
            if let Some(file) = &snapshot.file {
                info!(%kind, %source, file = %file.name, size = file.size_bytes, "File selected");
            }
            metrics::counter!("rockfall_intake_submissions_total", "kind" => kind.to_string())
                .increment(1);
            self.publish(event);
        }

        Ok(snapshot)
    }

    /// Empty a slot
    ///
    /// A run already in flight keeps the inputs it captured at start.
    pub fn clear(&self, kind: IntakeKind) -> SlotSnapshot {
        let (snapshot, removed, ready) = {
            let mut workflow = self.state.lock();
            let removed = workflow.intake.slot_mut(kind).clear();
            (
                workflow.intake.slot(kind).snapshot(),
                removed,
                workflow.intake.is_ready(),
            )
        };

        if let Some(file) = removed {
            info!(%kind, file = %file.name, "File removed");
            self.publish(WorkflowEvent::SlotChanged {
                kind,
                file: None,
                ready,
            });
        }

        snapshot
    }

    /// Both slots
    pub fn intake(&self) -> IntakeSnapshot {
        self.state.lock().intake.snapshot()
    }

    /// Both slots are populated
    pub fn is_ready(&self) -> bool {
        self.state.lock().intake.is_ready()
    }

    /// Current gate state
    pub fn state(&self) -> AnalysisState {
        self.state.lock().gate.state()
    }

    /// Gate snapshot
    pub fn analysis(&self) -> GateSnapshot {
        self.state.lock().gate.snapshot()
    }

    /// Start an analysis if the gate allows it
    ///
    /// Must be called from within a tokio runtime; the run is driven by a
    /// spawned task.
    pub fn start(&self) -> StartOutcome {
        let (outcome, launch) = {
            let mut guard = self.state.lock();
            let workflow = &mut *guard;
            let outcome = workflow.gate.start(&workflow.intake);
            let launch = match &outcome {
                StartOutcome::Started { run_id } => {
                    let token = CancellationToken::new();
                    workflow.cancel_token = Some(token.clone());
                    Some((
                        *run_id,
                        AnalysisRequest::from_pair(*run_id, &workflow.intake),
                        token,
                    ))
                }
                _ => None,
            };
            (outcome, launch)
        };

        let Some((run_id, request, token)) = launch else {
            metrics::counter!("rockfall_analysis_start_refused_total").increment(1);
            return outcome;
        };

        metrics::counter!("rockfall_analysis_runs_started_total").increment(1);
        self.publish(WorkflowEvent::RunStarted { run_id });

        match request {
            Ok(request) => self.spawn_run(request, token),
            Err(error) => finish_run(&self.state, &self.events, run_id, Err(error)),
        }

        outcome
    }

    fn spawn_run(&self, request: AnalysisRequest, token: CancellationToken) {
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let backend = Arc::clone(&self.backend);
        let timeout = self.options.timeout;
        let run_id = request.run_id;

        tokio::spawn(async move {
            let result = tokio::select! {
                () = token.cancelled() => {
                    debug!(%run_id, "Run task observed cancellation");
                    return;
                }
                result = run_backend(backend.as_ref(), &request, timeout) => result,
            };

            finish_run(&state, &events, run_id, result);
        });
    }

    /// Abandon the run in flight
    pub fn cancel(&self) -> CancelOutcome {
        let outcome = {
            let mut workflow = self.state.lock();
            let outcome = workflow.gate.cancel();
            if matches!(outcome, CancelOutcome::Cancelled { .. }) {
                if let Some(token) = workflow.cancel_token.take() {
                    token.cancel();
                }
            }
            outcome
        };

        if let CancelOutcome::Cancelled { run_id } = outcome {
            metrics::counter!("rockfall_analysis_runs_total", "outcome" => "cancelled").increment(1);
            self.publish(WorkflowEvent::RunCancelled { run_id });
        }

        outcome
    }

    /// Go back to an empty, idle workflow; refused while a run is in flight
    pub fn reset(&self) -> ResetOutcome {
        let outcome = {
            let mut workflow = self.state.lock();
            let Workflow { intake, gate, .. } = &mut *workflow;
            gate.reset(intake)
        };

        if matches!(outcome, ResetOutcome::Reset { .. }) {
            self.publish(WorkflowEvent::Reset);
        }

        outcome
    }

    /// Which screen is visible
    pub fn view_kind(&self) -> View {
        View::for_state(self.state())
    }

    /// The visible screen with its content
    pub fn screen(&self, seed: Option<u64>) -> Screen {
        let (intake, gate) = {
            let workflow = self.state.lock();
            (workflow.intake.snapshot(), workflow.gate.snapshot())
        };

        match View::for_state(gate.state) {
            View::Intake => Screen::Intake(IntakeView::new(intake, &gate)),
            View::Results => Screen::Results(Box::new(ResultsView::new(
                gate.report,
                self.heatmap(seed),
            ))),
        }
    }

    /// Draw a heat map; an explicit seed wins over the configured one
    pub fn heatmap(&self, seed: Option<u64>) -> HeatMap {
        let config = &self.options.heatmap;
        HeatMap::render(seed.or(config.seed), config.rows, config.columns)
    }
}

async fn run_backend(
    backend: &dyn AnalysisBackend,
    request: &AnalysisRequest,
    timeout: Option<Duration>,
) -> AnalysisResult<AnalysisReport> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, backend.analyze(request))
            .await
            .unwrap_or_else(|_| {
                Err(AnalysisError::Timeout {
                    millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                })
            }),
        None => backend.analyze(request).await,
    }
}

fn finish_run(
    state: &Mutex<Workflow>,
    events: &broadcast::Sender<WorkflowEvent>,
    run_id: Uuid,
    result: AnalysisResult<AnalysisReport>,
) {
    let failure_code = result.as_ref().err().map(AnalysisError::code);

    let outcome = {
        let mut workflow = state.lock();
        let outcome = workflow.gate.complete(run_id, result);
        if outcome != CompletionOutcome::Stale {
            workflow.cancel_token = None;
        }
        outcome
    };

    let event = match (outcome, failure_code) {
        (CompletionOutcome::Stale, _) => {
            debug!(%run_id, "Discarded completion of abandoned run");
            return;
        }
        (CompletionOutcome::Applied(_), None) => {
            metrics::counter!("rockfall_analysis_runs_total", "outcome" => "completed").increment(1);
            WorkflowEvent::RunCompleted { run_id }
        }
        (CompletionOutcome::Applied(_), Some(code)) => {
            warn!(%run_id, code, "Analysis run failed");
            metrics::counter!("rockfall_analysis_runs_total", "outcome" => "failed").increment(1);
            WorkflowEvent::RunFailed { run_id, code }
        }
    };

    let _ = events.send(event);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedAnalysis;
    use pretty_assertions::assert_eq;
    use rockfall_core::config::{IntakeConfig, IntakePolicy};
    use std::sync::Once;
    use tokio::time::{Instant, sleep};

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    fn controller_with(backend: SimulatedAnalysis, options: WorkflowOptions) -> WorkflowController {
        init_test_logging();
        WorkflowController::new(IntakePair::default(), Arc::new(backend), options)
    }

    fn controller() -> WorkflowController {
        controller_with(SimulatedAnalysis::new(), WorkflowOptions::default())
    }

    fn fill(controller: &WorkflowController) {
        controller
            .submit(IntakeKind::Imagery, SelectedFile::new("north_wall.png", 2048))
            .unwrap();
        controller
            .submit(IntakeKind::SensorReadings, SelectedFile::new("sensors.csv", 512))
            .unwrap();
    }

    async fn next_run_event(rx: &mut broadcast::Receiver<WorkflowEvent>) -> WorkflowEvent {
        loop {
            match rx.recv().await.unwrap() {
                WorkflowEvent::SlotChanged { .. } | WorkflowEvent::RunStarted { .. } => {}
                other => return other,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_without_inputs_is_not_ready() {
        let controller = controller();

        assert_eq!(
            controller.start(),
            StartOutcome::NotReady {
                missing: vec![IntakeKind::Imagery, IntakeKind::SensorReadings]
            }
        );
        assert_eq!(controller.state(), AnalysisState::Idle);
        assert_eq!(controller.view_kind(), View::Intake);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_completes_after_three_seconds() {
        let controller = controller();
        let mut rx = controller.subscribe();
        fill(&controller);

        let started = Instant::now();
        let outcome = controller.start();
        assert!(outcome.is_started());
        assert_eq!(controller.state(), AnalysisState::Running);

        sleep(Duration::from_millis(2999)).await;
        assert_eq!(controller.state(), AnalysisState::Running);
        assert_eq!(controller.view_kind(), View::Intake);

        let event = next_run_event(&mut rx).await;
        assert!(matches!(event, WorkflowEvent::RunCompleted { .. }));
        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert_eq!(controller.state(), AnalysisState::Done);
        assert_eq!(controller.view_kind(), View::Results);

        let snapshot = controller.analysis();
        assert_eq!(
            snapshot.report.map(|r| r.imagery),
            Some("north_wall.png".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unusual_file_names_still_complete() {
        let controller = controller();
        let mut rx = controller.subscribe();
        let long_name = format!("{}.csv", "readings_".repeat(40));
        controller
            .submit(IntakeKind::Imagery, SelectedFile::new("", 0))
            .unwrap();
        controller
            .submit(IntakeKind::SensorReadings, SelectedFile::new(long_name.clone(), 512))
            .unwrap();

        let started = Instant::now();
        assert!(controller.start().is_started());

        let event = next_run_event(&mut rx).await;
        assert!(matches!(event, WorkflowEvent::RunCompleted { .. }));
        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert_eq!(controller.state(), AnalysisState::Done);

        let report = controller.analysis().report.unwrap();
        assert_eq!(report.imagery, "");
        assert_eq!(report.sensor_readings, long_name);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let mut config = Config::default();
        config.intake.max_file_size = 0;

        let err = WorkflowController::from_config(&config).unwrap_err();
        assert_eq!(err.code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("max_file_size"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_while_running_is_ignored() {
        let controller = controller();
        fill(&controller);

        let StartOutcome::Started { run_id } = controller.start() else {
            panic!("expected run to start");
        };
        assert_eq!(controller.start(), StartOutcome::AlreadyRunning { run_id });
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_after_done_is_ignored() {
        let controller = controller();
        let mut rx = controller.subscribe();
        fill(&controller);
        controller.start();
        next_run_event(&mut rx).await;

        assert_eq!(controller.start(), StartOutcome::AlreadyComplete);
        assert_eq!(controller.state(), AnalysisState::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_returns_to_idle_and_ignores_late_completion() {
        let controller = controller();
        let mut rx = controller.subscribe();
        fill(&controller);

        let StartOutcome::Started { run_id } = controller.start() else {
            panic!("expected run to start");
        };
        sleep(Duration::from_millis(1000)).await;

        assert_eq!(controller.cancel(), CancelOutcome::Cancelled { run_id });
        assert_eq!(controller.state(), AnalysisState::Idle);
        assert_eq!(
            next_run_event(&mut rx).await,
            WorkflowEvent::RunCancelled { run_id }
        );

        sleep(Duration::from_millis(5000)).await;
        assert_eq!(controller.state(), AnalysisState::Idle);
        assert!(controller.analysis().report.is_none());
        assert!(rx.try_recv().is_err());

        // Inputs are kept so the run can be started again
        assert!(controller.is_ready());
        assert!(controller.start().is_started());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_when_idle() {
        let controller = controller();
        assert_eq!(
            controller.cancel(),
            CancelOutcome::NotRunning {
                state: AnalysisState::Idle
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_a_slot_does_not_abort_the_run() {
        let controller = controller();
        let mut rx = controller.subscribe();
        fill(&controller);
        controller.start();

        controller.clear(IntakeKind::Imagery);
        assert!(!controller.is_ready());
        assert_eq!(controller.state(), AnalysisState::Running);

        let event = next_run_event(&mut rx).await;
        assert!(matches!(event, WorkflowEvent::RunCompleted { .. }));
        assert_eq!(controller.state(), AnalysisState::Done);
        assert_eq!(
            controller.analysis().report.map(|r| r.imagery),
            Some("north_wall.png".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_failure_returns_to_idle() {
        let controller = controller_with(
            SimulatedAnalysis::new()
                .with_delay(Duration::from_millis(100))
                .with_failure("sensor export truncated"),
            WorkflowOptions::default(),
        );
        let mut rx = controller.subscribe();
        fill(&controller);
        controller.start();

        let event = next_run_event(&mut rx).await;
        assert!(matches!(
            event,
            WorkflowEvent::RunFailed {
                code: "PROCESSING_FAILED",
                ..
            }
        ));
        assert_eq!(controller.state(), AnalysisState::Idle);

        let failure = controller.analysis().last_error.unwrap();
        assert_eq!(
            failure.message,
            "Analysis processing failed: sensor export truncated"
        );
        assert!(failure.retryable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fails_the_run() {
        let controller = controller_with(
            SimulatedAnalysis::new(),
            WorkflowOptions {
                timeout: Some(Duration::from_millis(500)),
                ..WorkflowOptions::default()
            },
        );
        let mut rx = controller.subscribe();
        fill(&controller);
        controller.start();

        let event = next_run_event(&mut rx).await;
        assert!(matches!(
            event,
            WorkflowEvent::RunFailed {
                code: "ANALYSIS_TIMEOUT",
                ..
            }
        ));
        assert_eq!(controller.state(), AnalysisState::Idle);
        assert_eq!(
            controller.analysis().last_error.map(|f| f.message),
            Some("Analysis timed out after 500 ms".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_after_done_clears_everything() {
        let controller = controller();
        let mut rx = controller.subscribe();
        fill(&controller);
        controller.start();
        next_run_event(&mut rx).await;

        assert_eq!(
            controller.reset(),
            ResetOutcome::Reset {
                previous: AnalysisState::Done
            }
        );
        assert_eq!(controller.state(), AnalysisState::Idle);
        assert_eq!(controller.view_kind(), View::Intake);
        assert!(!controller.is_ready());
        assert_eq!(controller.intake().missing.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_refused_while_running() {
        let controller = controller();
        fill(&controller);
        let StartOutcome::Started { run_id } = controller.start() else {
            panic!("expected run to start");
        };

        assert_eq!(controller.reset(), ResetOutcome::Running { run_id });
        assert!(controller.is_ready());
    }

    #[tokio::test]
    async fn test_enforced_policy_rejects_mismatched_drop() {
        init_test_logging();
        let controller = WorkflowController::new(
            IntakePair::from_config(&IntakeConfig {
                policy: IntakePolicy::Enforced,
                ..IntakeConfig::default()
            }),
            Arc::new(SimulatedAnalysis::new()),
            WorkflowOptions::default(),
        );

        let err = controller
            .offer(
                IntakeKind::Imagery,
                vec![SelectedFile::new("sensors.csv", 1)],
                IntakeSource::Drop,
            )
            .unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_FILE_TYPE");
        assert!(controller.intake().imagery.file.is_none());
    }

    #[tokio::test]
    async fn test_slot_events() {
        let controller = controller();
        let mut rx = controller.subscribe();

        controller
            .submit(IntakeKind::Imagery, SelectedFile::new("a.png", 1))
            .unwrap();
        controller
            .offer(IntakeKind::Imagery, Vec::<SelectedFile>::new(), IntakeSource::Drop)
            .unwrap();
        controller.clear(IntakeKind::Imagery);
        controller.clear(IntakeKind::Imagery);

        assert_eq!(
            rx.try_recv().unwrap(),
            WorkflowEvent::SlotChanged {
                kind: IntakeKind::Imagery,
                file: Some(SelectedFile::new("a.png", 1)),
                ready: false,
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            WorkflowEvent::SlotChanged {
                kind: IntakeKind::Imagery,
                file: None,
                ready: false,
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_screen_follows_state() {
        let controller = controller_with(
            SimulatedAnalysis::new().with_delay(Duration::ZERO),
            WorkflowOptions::default(),
        );
        let mut rx = controller.subscribe();

        assert_eq!(controller.screen(None).view(), View::Intake);

        fill(&controller);
        controller.start();
        next_run_event(&mut rx).await;

        let Screen::Results(results) = controller.screen(Some(7)) else {
            panic!("expected results screen");
        };
        assert_eq!(results.heatmap.seed, Some(7));
        assert_eq!(results.heatmap.cells.len(), 96);
        assert!(results.report.is_some());
    }

    #[test]
    fn test_heatmap_seed_precedence() {
        let controller = controller_with(
            SimulatedAnalysis::new(),
            WorkflowOptions {
                heatmap: HeatMapConfig {
                    seed: Some(11),
                    ..HeatMapConfig::default()
                },
                ..WorkflowOptions::default()
            },
        );

        assert_eq!(controller.heatmap(None).seed, Some(11));
        assert_eq!(controller.heatmap(Some(3)).seed, Some(3));
        assert_eq!(controller.heatmap(None), controller.heatmap(None));
    }
}
