//! Per-mount portfolio load cycle

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use folio_core::lifecycle::{
    CommitOutcome, LoadFailure, LoadedSnapshot, MountGuard, MountToken, Settled, StateSlot,
};
use folio_core::rules::check_snapshot;
use folio_core::{log_op_end, log_op_error, log_op_start};
use folio_core_types::schema::{EVENT_COMMIT, EVENT_STALE};

use crate::errors::{response_error, Result};
use crate::parser::{body_digest, parse_snapshot};
use crate::source::DataSource;

const OP_LOAD: &str = "load_portfolio";

/// Fetches the Data Store once per mount and commits the outcome
///
/// The loader holds no state of its own beyond the source, so one loader can
/// serve any number of independent mounts.
#[derive(Clone)]
pub struct PortfolioLoader {
    source: Arc<dyn DataSource>,
}

impl PortfolioLoader {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn from_source<S: DataSource + 'static>(source: S) -> Self {
        Self::new(Arc::new(source))
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// Mount `slot` and run its single load
    ///
    /// The returned guard keeps the mount alive; drop it to unmount.
    pub async fn mount(&self, slot: &StateSlot) -> (MountGuard, CommitOutcome) {
        let guard = slot.mount_guarded();
        let outcome = self.load(slot, guard.token()).await;
        (guard, outcome)
    }

    /// Fetch once and commit into `slot` if `token`'s mount is still live
    ///
    /// A transport failure, a non-success status and a parse failure all
    /// settle as `Failed`. Nothing is retried.
    pub async fn load(&self, slot: &StateSlot, token: &MountToken) -> CommitOutcome {
        let settled = self.fetch_settled(token).await;
        let state_name = if settled.is_ok() { "loaded" } else { "failed" };

        let outcome = slot.commit(token, settled);
        match outcome {
            CommitOutcome::Committed => tracing::debug!(
                op = OP_LOAD,
                event = EVENT_COMMIT,
                mount_id = %token.mount_id(),
                state = state_name,
            ),
            CommitOutcome::Stale => tracing::debug!(
                op = OP_LOAD,
                event = EVENT_STALE,
                mount_id = %token.mount_id(),
                state = state_name,
                "mount ended before the fetch settled; result dropped"
            ),
            CommitOutcome::AlreadySettled => tracing::warn!(
                op = OP_LOAD,
                mount_id = %token.mount_id(),
                "mount already settled; second result dropped"
            ),
        }
        outcome
    }

    /// Fetch and classify without touching any slot
    pub async fn fetch_settled(&self, token: &MountToken) -> Settled {
        let start = Instant::now();
        log_op_start!(
            OP_LOAD,
            mount_id = %token.mount_id(),
            source = %self.source.describe(),
        );

        match self.fetch_snapshot().await {
            Ok(loaded) => {
                log_op_end!(
                    OP_LOAD,
                    duration_ms = start.elapsed().as_millis() as u64,
                    mount_id = %token.mount_id(),
                    digest = loaded.digest(),
                    projects_len = loaded.snapshot().projects.len() as u64,
                );
                Ok(loaded)
            }
            Err(err) => {
                log_op_error!(
                    OP_LOAD,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    mount_id = %token.mount_id(),
                    status = err.status().map(u64::from),
                );
                Err(LoadFailure::from(err.with_mount_id(token.mount_id().clone())))
            }
        }
    }

    async fn fetch_snapshot(&self) -> Result<LoadedSnapshot> {
        let response = self.source.fetch().await?;
        if !response.is_success() {
            return Err(response_error(&self.source.describe(), response.status));
        }

        let snapshot = parse_snapshot(&response.body)?;
        for violation in check_snapshot(&snapshot) {
            tracing::warn!(op = OP_LOAD, %violation, "portfolio snapshot invariant broken");
        }

        Ok(LoadedSnapshot::new(
            snapshot,
            body_digest(&response.body),
            Utc::now(),
        ))
    }
}

impl std::fmt::Debug for PortfolioLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioLoader")
            .field("source", &self.source.describe())
            .finish()
    }
}
