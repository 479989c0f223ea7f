use folio_core_types::{MountId, RequestId};
use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs, tests and the JSON
/// error bodies returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Data Store fetch
    /// The Data Store could not be reached
    Transport,
    /// The Data Store answered with a non-success status
    Response,
    /// The body did not parse as the portfolio shape
    Parse,

    // Domain
    InvalidInput,
    UnknownLabel,
    /// The snapshot is absent (not loaded yet, or failed to load)
    Unavailable,

    // Service
    Config,
    Render,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Transport => "ERR_TRANSPORT",
            ExErrorKind::Response => "ERR_RESPONSE",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownLabel => "ERR_UNKNOWN_LABEL",
            ExErrorKind::Unavailable => "ERR_UNAVAILABLE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Render => "ERR_RENDER",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, HTTP status, mount and request ids) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    status: Option<u16>,
    mount_id: Option<MountId>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            status: None,
            mount_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the HTTP status the Data Store answered with
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Add mount context
    pub fn with_mount_id(mut self, mount_id: MountId) -> Self {
        self.mount_id = Some(mount_id);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the HTTP status context, if any
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Get the mount context, if any
    pub fn mount_id(&self) -> Option<&MountId> {
        self.mount_id.as_ref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(status) = self.status {
            write!(f, " (status: {})", status)?;
        }
        if let Some(mount_id) = &self.mount_id {
            write!(f, " (mount_id: {})", mount_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for Folio operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    /// A filter label string is neither the "all" sentinel nor a category
    #[error("Unknown filter label: {label}")]
    UnknownLabel { label: String },

    /// A label was selected that the current filter list does not offer
    #[error("Filter label {label} is not offered by the current filter list")]
    LabelNotOffered { label: String },

    /// The page was asked for data while the snapshot is absent
    #[error("Portfolio data is not available")]
    SnapshotUnavailable,

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<FolioError> for ExError {
    fn from(err: FolioError) -> Self {
        match err {
            FolioError::UnknownLabel { label } => ExError::new(ExErrorKind::UnknownLabel)
                .with_message(format!("Unknown filter label: {}", label)),

            FolioError::LabelNotOffered { label } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("select_filter")
                .with_message(format!("Label {} is not in the filter list", label)),

            FolioError::SnapshotUnavailable => ExError::new(ExErrorKind::Unavailable)
                .with_message("Portfolio data is not available"),

            FolioError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to FolioError
impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_kind_codes() {
        let cases = [
            (ExErrorKind::Transport, "ERR_TRANSPORT"),
            (ExErrorKind::Response, "ERR_RESPONSE"),
            (ExErrorKind::Parse, "ERR_PARSE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_status_and_op() {
        let err = ExError::new(ExErrorKind::Response)
            .with_op("fetch_data_store")
            .with_status(500)
            .with_message("non-success status");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_RESPONSE]"));
        assert!(rendered.contains("fetch_data_store"));
        assert!(rendered.contains("(status: 500)"));
    }

    #[test]
    fn test_display_includes_request_id() {
        let request_id = RequestId::new();
        let err = ExError::new(ExErrorKind::Unavailable).with_request_id(request_id.clone());

        assert_eq!(err.request_id(), Some(&request_id));
        assert!(err
            .to_string()
            .ends_with(&format!("(request_id: {})", request_id)));
    }

    #[test]
    fn test_status_none_by_default() {
        let err = ExError::new(ExErrorKind::Transport);
        assert!(err.status().is_none());
        assert!(err.mount_id().is_none());
    }
}
