//! Error types for the analysis workflow

use rockfall_core::IntakeKind;
use thiserror::Error;

/// Result type alias for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while taking in files or running an analysis
///
/// A start request that the gate refuses (inputs missing, already running) is
/// reported as an outcome, not as one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// One or both inputs were absent when the backend was invoked
    #[error("Missing analysis input: {}", format_kinds(.missing))]
    MissingInput {
        /// Slots without a file
        missing: Vec<IntakeKind>,
    },

    /// The file does not match the slot's accept filter
    #[error("File type not accepted for {kind}: {file_name} (accepted: {})", .allowed.join(", "))]
    UnsupportedFileType {
        /// Slot the file was offered to
        kind: IntakeKind,
        /// Offered file name
        file_name: String,
        /// Accept filter entries
        allowed: Vec<String>,
    },

    /// The submitted file could not be read
    #[error("Malformed input: {reason}")]
    MalformedInput {
        /// What was wrong with it
        reason: String,
    },

    /// Backend processing error
    #[error("Analysis processing failed: {reason}")]
    ProcessingFailed {
        /// Failure reason
        reason: String,
    },

    /// The backend did not finish in time
    #[error("Analysis timed out after {millis} ms")]
    Timeout {
        /// Configured timeout
        millis: u64,
    },

    /// The configured backend is not available
    #[error("Analysis backend unavailable: {backend}")]
    BackendUnavailable {
        /// Backend name
        backend: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

impl AnalysisError {
    /// Create a missing input error
    pub fn missing_input(missing: Vec<IntakeKind>) -> Self {
        Self::MissingInput { missing }
    }

    /// Create an unsupported file type error
    pub fn unsupported_file_type(
        kind: IntakeKind,
        file_name: impl Into<String>,
        allowed: Vec<String>,
    ) -> Self {
        Self::UnsupportedFileType {
            kind,
            file_name: file_name.into(),
            allowed,
        }
    }

    /// Create a malformed input error
    pub fn malformed_input(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Create a processing failed error
    pub fn processing_failed(reason: impl Into<String>) -> Self {
        Self::ProcessingFailed {
            reason: reason.into(),
        }
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable(backend: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => "MISSING_INPUT",
            Self::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::ProcessingFailed { .. } => "PROCESSING_FAILED",
            Self::Timeout { .. } => "ANALYSIS_TIMEOUT",
            Self::BackendUnavailable { .. } => "BACKEND_UNAVAILABLE",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Whether starting a new run could succeed without changing the inputs
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProcessingFailed { .. }
                | Self::Timeout { .. }
                | Self::BackendUnavailable { .. }
        )
    }
}

fn format_kinds(kinds: &[IntakeKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Core errors only reach the workflow while it is being configured
impl From<rockfall_core::Error> for AnalysisError {
    fn from(err: rockfall_core::Error) -> Self {
        match err {
            rockfall_core::Error::Configuration { message }
            | rockfall_core::Error::Validation { message, .. } => Self::Configuration { message },
            other @ rockfall_core::Error::FileSizeExceeded { .. } => {
                Self::malformed_input(other.to_string())
            }
        }
    }
}
