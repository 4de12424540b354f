//! Error types for the rockfall dashboard

use std::{error::Error as StdError, fmt};

/// Main error type for the rockfall dashboard
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// File size error
    FileSizeExceeded {
        /// Actual file size
        size: u64,
        /// Maximum allowed size
        max_size: u64,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Machine-readable code used in API error bodies
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::FileSizeExceeded { .. } => "FILE_TOO_LARGE",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::FileSizeExceeded { size, max_size } => {
                write!(f, "File size {size} exceeds maximum of {max_size}")
            }
        }
    }
}

impl StdError for Error {}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map_or_else(|| "unknown".to_string(), ToString::to_string);
        Self::Validation {
            field,
            message: errors.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "analysis.delay_ms must be positive".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Configuration error: analysis.delay_ms must be positive"
        );
        assert_eq!(error.code(), "CONFIGURATION_ERROR");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_file_size_exceeded() {
        let error = Error::FileSizeExceeded {
            size: 2048,
            max_size: 1024,
        };
        assert_eq!(error.to_string(), "File size 2048 exceeds maximum of 1024");
        assert_eq!(error.code(), "FILE_TOO_LARGE");
    }

    #[test]
    fn test_validation_errors_keep_first_field() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("port", validator::ValidationError::new("range"));

        let error = Error::from(errors);
        assert!(matches!(&error, Error::Validation { field, .. } if field == "port"));
        assert_eq!(error.code(), "VALIDATION_ERROR");
    }
}
