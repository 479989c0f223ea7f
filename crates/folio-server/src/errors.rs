//! Error handling for folio-server
//!
//! Wraps folio-core ExError with service helpers and the HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use folio_core::errors::{ExError, ExErrorKind, FolioError};
use folio_core_types::RequestId;
use serde_json::json;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a config error from a layered configuration failure
pub fn config_error(err: config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(err.to_string())
}

/// Create a config error for a value that loaded but is unusable
pub fn invalid_config(key: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(format!("{}: {}", key, reason))
}

/// Create a render error for a template that failed to compile or render
pub fn render_error(template: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Render)
        .with_op("render_page")
        .with_message(format!("Template {} failed: {}", template, reason))
}

/// Error returned by handlers, rendered as a JSON error body
#[derive(Debug)]
pub struct ApiError(ExError);

impl ApiError {
    pub fn inner(&self) -> &ExError {
        &self.0
    }

    /// Tag the error with the request it failed
    pub fn with_request_id(self, request_id: RequestId) -> Self {
        Self(self.0.with_request_id(request_id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ExErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ExErrorKind::InvalidInput | ExErrorKind::UnknownLabel => StatusCode::BAD_REQUEST,
            ExErrorKind::Transport | ExErrorKind::Response | ExErrorKind::Parse => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(
                err.kind = ?self.0.kind(),
                err.code = self.0.code(),
                request_id = self.0.request_id().map(RequestId::as_str),
                status = status.as_u16(),
                "{}",
                self.0
            );
        }

        let body = json!({
            "error": {
                "code": self.0.code(),
                "message": self.0.message(),
                "request_id": self.0.request_id().map(RequestId::as_str),
            }
        });
        (status, Json(body)).into_response()
    }
}
