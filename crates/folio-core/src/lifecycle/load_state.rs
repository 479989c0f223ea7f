use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::{ExError, ExErrorKind};
use crate::model::PortfolioSnapshot;

/// Why a Data Store fetch did not produce a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The Data Store could not be reached
    Transport,
    /// The Data Store answered with a non-success status
    Response { status: u16 },
    /// The body did not parse as the portfolio shape
    Parse,
}

/// A settled failure, kept for logs and tests; pages never show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl LoadFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ExError> for LoadFailure {
    fn from(err: ExError) -> Self {
        let kind = match err.kind() {
            ExErrorKind::Response => FailureKind::Response {
                status: err.status().unwrap_or(0),
            },
            ExErrorKind::Parse | ExErrorKind::Serialization => FailureKind::Parse,
            _ => FailureKind::Transport,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<LoadFailure> for ExError {
    fn from(failure: LoadFailure) -> Self {
        match failure.kind {
            FailureKind::Transport => ExError::new(ExErrorKind::Transport),
            FailureKind::Response { status } => {
                ExError::new(ExErrorKind::Response).with_status(status)
            }
            FailureKind::Parse => ExError::new(ExErrorKind::Parse),
        }
        .with_message(failure.message)
    }
}

/// A parsed snapshot together with fetch provenance
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    snapshot: Arc<PortfolioSnapshot>,
    digest: String,
    fetched_at: DateTime<Utc>,
}

impl LoadedSnapshot {
    pub fn new(snapshot: PortfolioSnapshot, digest: String, fetched_at: DateTime<Utc>) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            digest,
            fetched_at,
        }
    }

    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    /// Shared handle to the snapshot
    pub fn shared(&self) -> Arc<PortfolioSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// SHA-256 of the body bytes, hex encoded
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// The outcome of one fetch: what a mount may commit
pub type Settled = std::result::Result<LoadedSnapshot, LoadFailure>;

/// Load state of one mount
///
/// Consumers that only care about presence use [`LoadState::snapshot`];
/// `Unloaded` and `Failed` both read as absent there.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded(LoadedSnapshot),
    Failed(LoadFailure),
}

impl LoadState {
    /// The snapshot, if one is loaded
    pub fn snapshot(&self) -> Option<&PortfolioSnapshot> {
        match self {
            LoadState::Loaded(loaded) => Some(loaded.snapshot()),
            LoadState::Unloaded | LoadState::Failed(_) => None,
        }
    }

    pub fn is_unloaded(&self) -> bool {
        matches!(self, LoadState::Unloaded)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Unloaded => "unloaded",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

impl From<Settled> for LoadState {
    fn from(settled: Settled) -> Self {
        match settled {
            Ok(loaded) => LoadState::Loaded(loaded),
            Err(failure) => LoadState::Failed(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_and_failed_both_read_as_absent() {
        let unloaded = LoadState::Unloaded;
        let failed = LoadState::Failed(LoadFailure::new(FailureKind::Parse, "bad json"));

        assert!(unloaded.snapshot().is_none());
        assert!(failed.snapshot().is_none());
        assert_ne!(unloaded.name(), failed.name());
    }

    #[test]
    fn test_failure_from_response_error_keeps_status() {
        let err = ExError::new(ExErrorKind::Response).with_status(503);
        let failure = LoadFailure::from(err);
        assert_eq!(failure.kind, FailureKind::Response { status: 503 });
    }

    #[test]
    fn test_failure_round_trips_to_ex_error_kind() {
        let failure = LoadFailure::new(FailureKind::Transport, "connection refused");
        let err: ExError = failure.into();
        assert_eq!(err.kind(), ExErrorKind::Transport);
        assert_eq!(err.message(), "connection refused");
    }
}
