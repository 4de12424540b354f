//! Fixture datasets shown by the results dashboard
//!
//! Every record here is a compile-time constant. The display layer reads them;
//! nothing in the workflow computes or mutates them.

use serde::Serialize;

/// Direction a metric moved since the last reading
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Increasing
    Up,
    /// Decreasing
    Down,
    /// Unchanged
    Stable,
}

/// Traffic-light status of a metric card
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    /// Within safe limits
    Safe,
    /// Needs attention
    Warning,
    /// Outside safe limits
    Critical,
}

/// Risk classification for zones and heat-map cells
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low rockfall risk
    Low,
    /// Medium rockfall risk
    Medium,
    /// High rockfall risk
    High,
}

/// Alert severity
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Requires immediate action
    Critical,
    /// Requires follow-up
    Warning,
    /// Informational
    Info,
}

/// One card in the real-time monitoring grid
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricCard {
    /// Card title
    pub title: &'static str,
    /// Headline value
    pub value: &'static str,
    /// Change summary
    pub change: &'static str,
    /// Change direction
    pub trend: Trend,
    /// Status badge
    pub status: MetricStatus,
    /// Footnote
    pub description: &'static str,
}

/// A progress bar in the system performance strip
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PerformanceIndicator {
    /// Bar label
    pub label: &'static str,
    /// Value printed next to the label
    pub display_value: &'static str,
    /// Bar fill, 0-100
    pub progress_percent: u8,
}

/// A monitored zone with its current rockfall probability
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RiskZone {
    /// Zone identifier
    pub id: &'static str,
    /// Zone name
    pub name: &'static str,
    /// Risk classification
    pub risk_level: RiskLevel,
    /// Probability of a rockfall event, 0-100
    pub probability_percent: u8,
    /// Relative time of the last update
    pub last_update_label: &'static str,
}

/// An entry in the active alerts list
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AlertItem {
    /// Alert identifier
    pub id: &'static str,
    /// Severity
    pub severity: AlertSeverity,
    /// Headline
    pub title: &'static str,
    /// Detail text
    pub description: &'static str,
    /// Relative time the alert was raised
    pub timestamp_label: &'static str,
    /// Zone the alert refers to
    pub zone_label: &'static str,
    /// Whether an operator has acknowledged it
    pub acknowledged: bool,
}

/// Unacknowledged alert counts shown in the alert management card
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct AlertSummary {
    /// Unacknowledged critical alerts
    pub critical: usize,
    /// Unacknowledged warnings
    pub warning: usize,
}

impl AlertSummary {
    /// Count unacknowledged critical and warning alerts
    #[must_use]
    pub fn from_alerts(alerts: &[AlertItem]) -> Self {
        alerts
            .iter()
            .filter(|alert| !alert.acknowledged)
            .fold(Self::default(), |mut summary, alert| {
                match alert.severity {
                    AlertSeverity::Critical => summary.critical += 1,
                    AlertSeverity::Warning => summary.warning += 1,
                    AlertSeverity::Info => {}
                }
                summary
            })
    }
}

/// One sample of the 24 hour trend series
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrendPoint {
    /// Time-of-day label
    pub label: &'static str,
    /// Composite risk score, 0-100
    pub risk_score: u8,
    /// Ground displacement in mm/day
    pub displacement_mm: f64,
}

/// A headline figure in the trend analysis tab
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendHighlight {
    /// Highlight title
    pub title: &'static str,
    /// Headline value
    pub value: &'static str,
    /// Explanation
    pub detail: &'static str,
}

/// One entry of the system status bar
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusIndicator {
    /// Subsystem name
    pub label: &'static str,
    /// Reported state
    pub value: &'static str,
}

/// A channel alerts can be forwarded to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    /// Text message
    Sms,
    /// Email
    Email,
    /// Microsoft Teams
    Teams,
}

/// Status bar shown above both views
pub const SYSTEM_STATUS: [StatusIndicator; 3] = [
    StatusIndicator {
        label: "System",
        value: "Online",
    },
    StatusIndicator {
        label: "AI Engine",
        value: "Active",
    },
    StatusIndicator {
        label: "Monitoring",
        value: "24/7",
    },
];

/// Channels offered next to the alert summary
pub const NOTIFICATION_CHANNELS: [NotificationChannel; 3] = [
    NotificationChannel::Sms,
    NotificationChannel::Email,
    NotificationChannel::Teams,
];

/// Metric cards for the real-time monitoring grid
pub const METRIC_CARDS: [MetricCard; 6] = [
    MetricCard {
        title: "Overall Risk Level",
        value: "Medium",
        change: "+5% from yesterday",
        trend: Trend::Up,
        status: MetricStatus::Warning,
        description: "Composite risk assessment across all monitored zones",
    },
    MetricCard {
        title: "Active Sensors",
        value: "127/130",
        change: "98% operational",
        trend: Trend::Stable,
        status: MetricStatus::Safe,
        description: "Real-time geotechnical monitoring network status",
    },
    MetricCard {
        title: "Slope Stability",
        value: "87%",
        change: "-2% this week",
        trend: Trend::Down,
        status: MetricStatus::Warning,
        description: "Calculated stability factor for primary excavation slopes",
    },
    MetricCard {
        title: "Displacement Rate",
        value: "2.3mm/day",
        change: "+0.4mm increase",
        trend: Trend::Up,
        status: MetricStatus::Critical,
        description: "Average daily ground movement in high-risk zones",
    },
    MetricCard {
        title: "Weather Impact",
        value: "Low",
        change: "Clear conditions",
        trend: Trend::Stable,
        status: MetricStatus::Safe,
        description: "Environmental factors affecting slope stability",
    },
    MetricCard {
        title: "AI Confidence",
        value: "94.2%",
        change: "+1.2% improved",
        trend: Trend::Up,
        status: MetricStatus::Safe,
        description: "Machine learning model prediction accuracy",
    },
];

/// Bars in the system performance strip
pub const PERFORMANCE_INDICATORS: [PerformanceIndicator; 3] = [
    PerformanceIndicator {
        label: "Data Processing",
        display_value: "98%",
        progress_percent: 98,
    },
    PerformanceIndicator {
        label: "Network Latency",
        display_value: "12ms",
        progress_percent: 95,
    },
    PerformanceIndicator {
        label: "Model Accuracy",
        display_value: "94.2%",
        progress_percent: 94,
    },
];

/// High-priority risk zones
pub const RISK_ZONES: [RiskZone; 5] = [
    RiskZone {
        id: "Z-001",
        name: "North Wall - Level 3",
        risk_level: RiskLevel::High,
        probability_percent: 87,
        last_update_label: "2 min ago",
    },
    RiskZone {
        id: "Z-007",
        name: "East Bench - Level 2",
        risk_level: RiskLevel::Medium,
        probability_percent: 64,
        last_update_label: "5 min ago",
    },
    RiskZone {
        id: "Z-012",
        name: "South Ramp Access",
        risk_level: RiskLevel::High,
        probability_percent: 92,
        last_update_label: "1 min ago",
    },
    RiskZone {
        id: "Z-018",
        name: "West Wall - Level 4",
        risk_level: RiskLevel::Medium,
        probability_percent: 58,
        last_update_label: "8 min ago",
    },
    RiskZone {
        id: "Z-023",
        name: "Central Pit Bottom",
        risk_level: RiskLevel::Low,
        probability_percent: 23,
        last_update_label: "12 min ago",
    },
];

/// Active alerts, newest first
pub const ALERTS: [AlertItem; 5] = [
    AlertItem {
        id: "A001",
        severity: AlertSeverity::Critical,
        title: "High Displacement Rate Detected",
        description: "Ground movement exceeds 5mm/day threshold in monitored area",
        timestamp_label: "2 minutes ago",
        zone_label: "North Wall - Level 3",
        acknowledged: false,
    },
    AlertItem {
        id: "A002",
        severity: AlertSeverity::Warning,
        title: "Sensor Communication Lost",
        description: "Strain gauge SG-127 has lost connection",
        timestamp_label: "8 minutes ago",
        zone_label: "East Bench - Level 2",
        acknowledged: false,
    },
    AlertItem {
        id: "A003",
        severity: AlertSeverity::Critical,
        title: "Precipitation Alert",
        description: "Heavy rainfall predicted - increased rockfall risk",
        timestamp_label: "15 minutes ago",
        zone_label: "All Zones",
        acknowledged: false,
    },
    AlertItem {
        id: "A004",
        severity: AlertSeverity::Warning,
        title: "Vibration Anomaly",
        description: "Unusual seismic activity detected near excavation zone",
        timestamp_label: "22 minutes ago",
        zone_label: "South Ramp",
        acknowledged: false,
    },
    AlertItem {
        id: "A005",
        severity: AlertSeverity::Info,
        title: "Maintenance Complete",
        description: "Sensor network calibration successfully completed",
        timestamp_label: "1 hour ago",
        zone_label: "System Wide",
        acknowledged: true,
    },
];

/// 24 hour risk and displacement samples
pub const TREND_POINTS: [TrendPoint; 7] = [
    TrendPoint {
        label: "00:00",
        risk_score: 23,
        displacement_mm: 1.2,
    },
    TrendPoint {
        label: "04:00",
        risk_score: 25,
        displacement_mm: 1.4,
    },
    TrendPoint {
        label: "08:00",
        risk_score: 42,
        displacement_mm: 2.1,
    },
    TrendPoint {
        label: "12:00",
        risk_score: 65,
        displacement_mm: 2.8,
    },
    TrendPoint {
        label: "16:00",
        risk_score: 78,
        displacement_mm: 3.2,
    },
    TrendPoint {
        label: "20:00",
        risk_score: 54,
        displacement_mm: 2.5,
    },
    TrendPoint {
        label: "23:59",
        risk_score: 31,
        displacement_mm: 1.8,
    },
];

/// Headline figures above the trend charts
pub const TREND_HIGHLIGHTS: [TrendHighlight; 2] = [
    TrendHighlight {
        title: "7-Day Trend",
        value: "+12%",
        detail: "Risk levels have increased in 3 monitored zones",
    },
    TrendHighlight {
        title: "Peak Risk Hours",
        value: "2-6 PM",
        detail: "Highest probability during afternoon shifts",
    },
];
