//! Mapping of workflow errors to HTTP error responses

use axum::{http::StatusCode, response::Json};
use rockfall_analysis::AnalysisError;
use rockfall_core::types::ErrorResponse;

/// Error half of every fallible handler
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Build an error response without details
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HandlerError {
    (status, Json(ErrorResponse::new(message, code)))
}

/// Build an error response carrying structured details
pub fn error_with_details(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
    details: serde_json::Value,
) -> HandlerError {
    (status, Json(ErrorResponse::with_details(message, code, details)))
}

/// Status code for an analysis error
pub const fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::MissingInput { .. } => StatusCode::CONFLICT,
        AnalysisError::UnsupportedFileType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        AnalysisError::MalformedInput { .. } => StatusCode::BAD_REQUEST,
        AnalysisError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        AnalysisError::BackendUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AnalysisError::ProcessingFailed { .. } | AnalysisError::Configuration { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Convert an analysis error into an error response
pub fn from_analysis_error(error: &AnalysisError) -> HandlerError {
    let status = status_for(error);
    match error {
        AnalysisError::UnsupportedFileType { allowed, .. } => error_with_details(
            status,
            error.code(),
            error.to_string(),
            serde_json::json!({ "allowed": allowed }),
        ),
        _ => error_response(status, error.code(), error.to_string()),
    }
}
