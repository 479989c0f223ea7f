//! Error handling for folio-loader
//!
//! Wraps folio-core ExError with loader-specific helpers

use folio_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a transport error (the Data Store could not be reached)
pub fn transport_error(source: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Transport)
        .with_op("fetch_data_store")
        .with_message(format!("Fetching {} failed: {}", source, reason))
}

/// Create a response error for a non-success status
pub fn response_error(source: &str, status: u16) -> ExError {
    ExError::new(ExErrorKind::Response)
        .with_op("fetch_data_store")
        .with_status(status)
        .with_message(format!("{} answered with status {}", source, status))
}

/// Create a parse error from serde_json::Error
pub fn parse_error(err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Parse)
        .with_op("parse_snapshot")
        .with_message(format!(
            "Body is not a portfolio document (line {}, column {}): {}",
            err.line(),
            err.column(),
            err
        ))
}

/// Create a config error for a data source that cannot be built
pub fn source_config_error(reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("build_data_source")
        .with_message(reason.to_string())
}
