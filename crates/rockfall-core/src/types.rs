//! Core data types for the rockfall dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which intake slot a file belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntakeKind {
    /// High-resolution drone imagery of the pit walls
    Imagery,
    /// Geotechnical sensor readings export
    SensorReadings,
}

impl IntakeKind {
    /// Both kinds, in display order
    pub const ALL: [Self; 2] = [Self::Imagery, Self::SensorReadings];

    /// Card title shown above the slot
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Imagery => "Drone Imagery Analysis",
            Self::SensorReadings => "Sensor Data Processing",
        }
    }

    /// Short description shown inside the slot card
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Imagery => "Upload high-resolution drone images for geological analysis",
            Self::SensorReadings => "Upload CSV files containing geotechnical sensor readings",
        }
    }
}

impl std::fmt::Display for IntakeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imagery => write!(f, "imagery"),
            Self::SensorReadings => write!(f, "sensor_readings"),
        }
    }
}

impl FromStr for IntakeKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "imagery" | "drone-imagery" | "drone_imagery" => Ok(Self::Imagery),
            "sensor-readings" | "sensor_readings" | "sensor-data" | "sensor_data" => {
                Ok(Self::SensorReadings)
            }
            _ => Err(crate::Error::Validation {
                field: "kind".to_string(),
                message: format!("unknown intake slot '{s}'"),
            }),
        }
    }
}

/// Analysis gate state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    /// Waiting for both inputs and a start request
    #[default]
    Idle,
    /// Analysis in flight
    Running,
    /// Analysis finished; results are visible
    Done,
}

impl std::fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A file handed in from a picker or drop event
///
/// The content itself is opaque to the workflow; only the name, size and
/// declared content type travel with the selection. Names are kept as given,
/// empty or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name
    pub name: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Content type declared by the client, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl SelectedFile {
    /// Create a selection from a name and byte length
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_type: None,
        }
    }

    /// Attach the declared content type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Human readable size, e.g. `2 KB`
    #[must_use]
    pub fn display_size(&self) -> String {
        crate::utils::format_file_size(self.size_bytes)
    }
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Error code
    pub code: String,

    /// Success status (always false for errors)
    pub success: bool,

    /// Error timestamp
    pub timestamp: DateTime<Utc>,

    /// Optional additional details
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
            timestamp: Utc::now(),
            details: None,
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        code: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
            timestamp: Utc::now(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_analysis_state_default() {
        assert_eq!(AnalysisState::default(), AnalysisState::Idle);
    }

    #[test]
    fn test_analysis_state_display() {
        assert_eq!(AnalysisState::Idle.to_string(), "idle");
        assert_eq!(AnalysisState::Running.to_string(), "running");
        assert_eq!(AnalysisState::Done.to_string(), "done");
    }

    #[test]
    fn test_analysis_state_serialization() {
        let json = serde_json::to_string(&AnalysisState::Running).unwrap();
        assert_eq!(json, "\"running\"");
    }

    #[rstest]
    #[case("imagery", IntakeKind::Imagery)]
    #[case("drone-imagery", IntakeKind::Imagery)]
    #[case("IMAGERY", IntakeKind::Imagery)]
    #[case("sensor-readings", IntakeKind::SensorReadings)]
    #[case("sensor_readings", IntakeKind::SensorReadings)]
    #[case("sensor-data", IntakeKind::SensorReadings)]
    fn test_intake_kind_parse(#[case] input: &str, #[case] expected: IntakeKind) {
        assert_eq!(input.parse::<IntakeKind>().unwrap(), expected);
    }

    #[test]
    fn test_intake_kind_parse_unknown() {
        let err = "thermal".parse::<IntakeKind>().unwrap_err();
        assert!(err.to_string().contains("unknown intake slot 'thermal'"));
    }

    #[test]
    fn test_intake_kind_wire_names() {
        assert_eq!(
            serde_json::to_value(IntakeKind::SensorReadings).unwrap(),
            json!("sensor_readings")
        );
        assert_eq!(IntakeKind::SensorReadings.to_string(), "sensor_readings");
        assert_eq!(IntakeKind::Imagery.title(), "Drone Imagery Analysis");
    }

    #[test]
    fn test_selected_file_display_size() {
        let file = SelectedFile::new("site.png", 2048).with_content_type("image/png");
        assert_eq!(file.display_size(), "2 KB");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_selected_file_serialization_skips_missing_content_type() {
        let value = serde_json::to_value(SelectedFile::new("data.csv", 512)).unwrap();
        assert_eq!(value, json!({ "name": "data.csv", "size_bytes": 512 }));
    }

    #[test]
    fn test_error_response_with_details() {
        let details = json!({ "missing": ["imagery"] });
        let response = ErrorResponse::with_details("not ready", "NOT_READY", details.clone());

        assert_eq!(response.error, "not ready");
        assert_eq!(response.code, "NOT_READY");
        assert!(!response.success);
        assert_eq!(response.details, Some(details));
    }

    proptest! {
        #[test]
        fn test_selected_file_keeps_any_name(name in "\\PC{0,300}") {
            let file = SelectedFile::new(name.clone(), 1);
            let json = serde_json::to_string(&file).unwrap();
            let back: SelectedFile = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back.name, name);
        }

        #[test]
        fn test_analysis_state_roundtrip(state in prop_oneof![
            Just(AnalysisState::Idle),
            Just(AnalysisState::Running),
            Just(AnalysisState::Done),
        ]) {
            let serialized = serde_json::to_string(&state).unwrap();
            let deserialized: AnalysisState = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(state, deserialized);
        }
    }
}
