//! Display collaborators for the results view
//!
//! Each function hands out one fixture dataset. None of them look at the
//! analysis report; the datasets are the same for every run.

use rockfall_core::fixtures::{
    ALERTS, AlertItem, AlertSummary, METRIC_CARDS, MetricCard, NOTIFICATION_CHANNELS,
    NotificationChannel, PERFORMANCE_INDICATORS, PerformanceIndicator, RISK_ZONES, RiskZone,
    SYSTEM_STATUS, StatusIndicator, TREND_HIGHLIGHTS, TREND_POINTS, TrendHighlight, TrendPoint,
};
use serde::Serialize;

/// How a chart series is drawn
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Filled area under the line
    Area,
    /// Plain line
    Line,
}

/// Which trend point field a chart plots
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    /// Composite risk score
    Risk,
    /// Ground displacement in mm/day
    Displacement,
}

impl ChartMetric {
    fn value(self, point: &TrendPoint) -> f64 {
        match self {
            Self::Risk => f64::from(point.risk_score),
            Self::Displacement => point.displacement_mm,
        }
    }
}

/// One plotted sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ChartPoint {
    /// X-axis label
    pub label: &'static str,
    /// Y value
    pub value: f64,
}

/// A chart projected from the trend series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    /// Chart title
    pub title: &'static str,
    /// Drawing style
    pub kind: ChartKind,
    /// Plotted field
    pub metric: ChartMetric,
    /// Samples in time order
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn project(title: &'static str, kind: ChartKind, metric: ChartMetric) -> Self {
        Self {
            title,
            kind,
            metric,
            points: TREND_POINTS
                .iter()
                .map(|point| ChartPoint {
                    label: point.label,
                    value: metric.value(point),
                })
                .collect(),
        }
    }
}

/// Alerts with their unacknowledged counts
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AlertPanel {
    /// Every alert, newest first
    pub alerts: &'static [AlertItem],
    /// Unacknowledged critical and warning counts
    pub summary: AlertSummary,
    /// Where alerts can be forwarded
    pub channels: &'static [NotificationChannel],
}

/// Trend series with its headline figures
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPanel {
    /// 24 hour samples
    pub points: &'static [TrendPoint],
    /// Headline figures
    pub highlights: &'static [TrendHighlight],
}

/// Metric cards for the monitoring grid
pub const fn metric_cards() -> &'static [MetricCard] {
    &METRIC_CARDS
}

/// Progress bars for the system performance strip
pub const fn performance_indicators() -> &'static [PerformanceIndicator] {
    &PERFORMANCE_INDICATORS
}

/// Monitored zones
pub const fn risk_zones() -> &'static [RiskZone] {
    &RISK_ZONES
}

/// Active alerts and their summary
pub fn alerts() -> AlertPanel {
    AlertPanel {
        alerts: &ALERTS,
        summary: AlertSummary::from_alerts(&ALERTS),
        channels: &NOTIFICATION_CHANNELS,
    }
}

/// The status bar above both views
pub const fn system_status() -> &'static [StatusIndicator] {
    &SYSTEM_STATUS
}

/// Trend samples and highlights
pub const fn trends() -> TrendPanel {
    TrendPanel {
        points: &TREND_POINTS,
        highlights: &TREND_HIGHLIGHTS,
    }
}

/// The two trend charts
pub fn charts() -> Vec<ChartSeries> {
    vec![
        ChartSeries::project("Risk Level Trends (24hr)", ChartKind::Area, ChartMetric::Risk),
        ChartSeries::project(
            "Ground Displacement (mm/day)",
            ChartKind::Line,
            ChartMetric::Displacement,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(metric_cards().len(), 6);
        assert_eq!(performance_indicators().len(), 3);
        assert_eq!(risk_zones().len(), 5);
        assert_eq!(alerts().alerts.len(), 5);
        assert_eq!(trends().points.len(), 7);
        assert_eq!(trends().highlights.len(), 2);
    }

    #[test]
    fn test_alert_summary_counts_unacknowledged_only() {
        let panel = alerts();
        assert_eq!(
            panel.summary,
            AlertSummary {
                critical: 2,
                warning: 2
            }
        );
        assert_eq!(
            panel.channels,
            [
                NotificationChannel::Sms,
                NotificationChannel::Email,
                NotificationChannel::Teams
            ]
        );
    }

    #[test]
    fn test_system_status_bar() {
        let value = serde_json::to_value(system_status()).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!([
                { "label": "System", "value": "Online" },
                { "label": "AI Engine", "value": "Active" },
                { "label": "Monitoring", "value": "24/7" }
            ])
        );
    }

    #[test]
    fn test_charts_project_trend_points() {
        let charts = charts();
        assert_eq!(charts.len(), 2);

        let risk = &charts[0];
        assert_eq!(risk.title, "Risk Level Trends (24hr)");
        assert_eq!(risk.kind, ChartKind::Area);
        assert_eq!(risk.points.len(), TREND_POINTS.len());
        assert_eq!(risk.points[0].label, "00:00");
        assert_eq!(risk.points[0].value, 23.0);
        assert_eq!(risk.points[4].value, 78.0);

        let displacement = &charts[1];
        assert_eq!(displacement.title, "Ground Displacement (mm/day)");
        assert_eq!(displacement.kind, ChartKind::Line);
        assert_eq!(displacement.metric, ChartMetric::Displacement);
        assert_eq!(displacement.points[3].value, 2.8);
        assert_eq!(displacement.points[6].label, "23:59");
    }

    #[test]
    fn test_chart_wire_format() {
        let value = serde_json::to_value(&charts()[0]).unwrap_or_default();
        assert_eq!(value["kind"], "area");
        assert_eq!(value["metric"], "risk");
    }
}
