//! View switch between the intake screen and the results dashboard

use crate::backend::AnalysisReport;
use crate::display::{self, AlertPanel, ChartSeries, TrendPanel};
use crate::gate::{GateSnapshot, RunFailure};
use crate::intake::{IntakeSnapshot, SlotSnapshot};
use rockfall_core::AnalysisState;
use rockfall_core::fixtures::{MetricCard, PerformanceIndicator, RiskZone};
use rockfall_core::heatmap::HeatMap;
use serde::Serialize;

/// Which screen is visible
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Upload cards and the start trigger
    Intake,
    /// Monitoring dashboard
    Results,
}

impl View {
    /// Results once the analysis is done, intake otherwise
    pub const fn for_state(state: AnalysisState) -> Self {
        match state {
            AnalysisState::Done => Self::Results,
            AnalysisState::Idle | AnalysisState::Running => Self::Intake,
        }
    }
}

/// Everything the intake screen shows
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IntakeView {
    /// Drone imagery slot
    pub imagery: SlotSnapshot,
    /// Sensor readings slot
    pub sensor_readings: SlotSnapshot,
    /// Both slots are populated
    pub ready: bool,
    /// Whether the start trigger is offered
    pub show_trigger: bool,
    /// An analysis is in flight
    pub analyzing: bool,
    /// Gate state
    pub state: AnalysisState,
    /// Failure of the previous run, if any
    pub last_error: Option<RunFailure>,
}

impl IntakeView {
    /// Build the intake screen from snapshots
    pub fn new(intake: IntakeSnapshot, gate: &GateSnapshot) -> Self {
        Self {
            ready: intake.ready,
            show_trigger: intake.ready && gate.state != AnalysisState::Done,
            analyzing: gate.state == AnalysisState::Running,
            state: gate.state,
            last_error: gate.last_error.clone(),
            imagery: intake.imagery,
            sensor_readings: intake.sensor_readings,
        }
    }
}

/// Everything the results dashboard shows
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultsView {
    /// Report of the completed run
    pub report: Option<AnalysisReport>,
    /// Monitoring grid
    pub metric_cards: &'static [MetricCard],
    /// System performance strip
    pub performance: &'static [PerformanceIndicator],
    /// Site heat map
    pub heatmap: HeatMap,
    /// Monitored zones
    pub risk_zones: &'static [RiskZone],
    /// Trend analysis tab
    pub trends: TrendPanel,
    /// Trend charts
    pub charts: Vec<ChartSeries>,
    /// Alert management
    pub alerts: AlertPanel,
}

impl ResultsView {
    /// Assemble the dashboard around a freshly drawn heat map
    pub fn new(report: Option<AnalysisReport>, heatmap: HeatMap) -> Self {
        Self {
            report,
            metric_cards: display::metric_cards(),
            performance: display::performance_indicators(),
            heatmap,
            risk_zones: display::risk_zones(),
            trends: display::trends(),
            charts: display::charts(),
            alerts: display::alerts(),
        }
    }
}

/// The visible screen with its content
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Screen {
    /// Intake screen
    Intake(IntakeView),
    /// Results dashboard
    Results(Box<ResultsView>),
}

impl Screen {
    /// Which view this screen is
    pub const fn view(&self) -> View {
        match self {
            Self::Intake(_) => View::Intake,
            Self::Results(_) => View::Results,
        }
    }
}
