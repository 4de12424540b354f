//! File intake endpoints
//!
//! A slot takes the first multipart part that carries a filename. A request
//! without any file part leaves the slot as it was, the same way a cancelled
//! picker dialog does.

use crate::handlers::error::{HandlerError, error_response, error_with_details, from_analysis_error};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use rockfall_analysis::{IntakeSnapshot, IntakeSource, SlotSnapshot};
use rockfall_core::{IntakeKind, SelectedFile, utils::sanitize_filename};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Optional query parameters of an upload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    /// How the client obtained the file (`picker` or `drop`)
    #[serde(default)]
    pub source: Option<IntakeSource>,
}

/// Result of a change to one slot
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    /// The slot after the change
    pub slot: SlotSnapshot,
    /// Whether both slots are now populated
    pub ready: bool,
}

/// List both intake slots
pub async fn get_intake(State(state): State<Arc<AppState>>) -> Json<IntakeSnapshot> {
    Json(state.workflow.intake())
}

/// Upload a file into a slot
///
/// # Errors
///
/// * `BAD_REQUEST` - unknown slot or malformed multipart body
/// * `PAYLOAD_TOO_LARGE` - the file exceeds `intake.max_file_size`
/// * `UNSUPPORTED_MEDIA_TYPE` - the accept filter is enforced and does not match
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<SlotResponse>, HandlerError> {
    let kind = parse_kind(&kind)?;
    let source = query.source.unwrap_or(IntakeSource::Picker);
    let max_size = state.config.intake.max_file_size;

    let mut selected = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Error parsing multipart data: {}", e);
                let status = e.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "FILE_TOO_LARGE"
                } else {
                    "INVALID_MULTIPART"
                };
                return Err(error_response(status, code, format!("Invalid multipart data: {e}")));
            }
        };

        let Some(file_name) = field
            .file_name()
            .map(sanitize_filename)
            .filter(|name| !name.is_empty())
        else {
            debug!(field = ?field.name(), "Skipping multipart field without usable filename");
            continue;
        };
        let content_type = field.content_type().map(ToString::to_string);

        let data = field.bytes().await.map_err(|e| {
            error_response(
                e.status(),
                "INVALID_MULTIPART",
                format!("Failed to read file data: {e}"),
            )
        })?;

        let size = data.len() as u64;
        if size > max_size {
            let err = rockfall_core::Error::FileSizeExceeded {
                size,
                max_size,
            };
            return Err(error_with_details(
                StatusCode::PAYLOAD_TOO_LARGE,
                err.code(),
                err.to_string(),
                serde_json::json!({ "size": size, "max_size": max_size }),
            ));
        }

        let mut file = SelectedFile::new(file_name, size);
        if let Some(content_type) = content_type {
            file = file.with_content_type(content_type);
        }
        selected = Some(file);
        break;
    }

    if selected.is_none() {
        info!(%kind, "Upload carried no file; slot unchanged");
    }

    let slot = state
        .workflow
        .offer(kind, selected, source)
        .map_err(|e| from_analysis_error(&e))?;

    Ok(Json(SlotResponse {
        slot,
        ready: state.workflow.is_ready(),
    }))
}

/// Empty a slot
pub async fn clear_slot(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<SlotResponse>, HandlerError> {
    let kind = parse_kind(&kind)?;
    let slot = state.workflow.clear(kind);

    Ok(Json(SlotResponse {
        slot,
        ready: state.workflow.is_ready(),
    }))
}

fn parse_kind(raw: &str) -> Result<IntakeKind, HandlerError> {
    raw.parse::<IntakeKind>().map_err(|e| {
        error_with_details(
            StatusCode::BAD_REQUEST,
            "INVALID_SLOT",
            e.to_string(),
            serde_json::json!({ "allowed": IntakeKind::ALL }),
        )
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("imagery", IntakeKind::Imagery)]
    #[case("drone-imagery", IntakeKind::Imagery)]
    #[case("sensor_readings", IntakeKind::SensorReadings)]
    #[case("sensor-data", IntakeKind::SensorReadings)]
    fn test_parse_kind(#[case] raw: &str, #[case] expected: IntakeKind) {
        assert_eq!(parse_kind(raw).ok(), Some(expected));
    }

    #[test]
    fn test_parse_unknown_kind_is_bad_request() {
        let Err((status, Json(body))) = parse_kind("lidar") else {
            panic!("expected unknown slot to be rejected");
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_SLOT");
        assert_eq!(
            body.details,
            Some(serde_json::json!({ "allowed": ["imagery", "sensor_readings"] }))
        );
    }

    #[test]
    fn test_upload_query_source() {
        let query: UploadQuery = serde_json::from_str(r#"{"source":"drop"}"#).unwrap_or_default();
        assert_eq!(query.source, Some(IntakeSource::Drop));

        let query: UploadQuery = serde_json::from_str("{}").unwrap_or_default();
        assert!(query.source.is_none());
    }
}
