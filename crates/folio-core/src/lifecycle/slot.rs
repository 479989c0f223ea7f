use std::sync::{Arc, Mutex, MutexGuard};

use folio_core_types::MountId;

use super::load_state::{LoadState, Settled};
use crate::model::PortfolioSnapshot;

/// Proof of one mount; presented on commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountToken {
    generation: u64,
    mount_id: MountId,
}

impl MountToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mount_id(&self) -> &MountId {
        &self.mount_id
    }
}

/// Result of presenting a settled fetch to the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The slot moved out of `Unloaded`
    Committed,
    /// The token's mount is gone; nothing changed
    Stale,
    /// This mount already settled; nothing changed
    AlreadySettled,
}

#[derive(Debug, Default)]
struct SlotInner {
    generation: u64,
    live: bool,
    state: LoadState,
}

/// State container owned by one consumer
///
/// Every mount bumps the generation; every commit is checked against it.
/// Clones share the same container.
#[derive(Debug, Clone, Default)]
pub struct StateSlot {
    inner: Arc<Mutex<SlotInner>>,
}

impl StateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SlotInner> {
        // The inner value is replaced wholesale on every write, so a
        // poisoned guard still holds a consistent state.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Start a mount: discard any previous state and return a fresh token
    pub fn mount(&self) -> MountToken {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.live = true;
        inner.state = LoadState::Unloaded;
        MountToken {
            generation: inner.generation,
            mount_id: MountId::new(),
        }
    }

    /// Start a mount that ends when the returned guard drops
    pub fn mount_guarded(&self) -> MountGuard {
        let token = self.mount();
        MountGuard {
            slot: self.clone(),
            token,
        }
    }

    /// End the mount `token` belongs to
    ///
    /// The snapshot is discarded. A token from an older mount is ignored.
    pub fn unmount(&self, token: &MountToken) {
        let mut inner = self.lock();
        if inner.generation == token.generation && inner.live {
            inner.generation += 1;
            inner.live = false;
            inner.state = LoadState::Unloaded;
        }
    }

    /// Whether `token` still belongs to the current, live mount
    pub fn is_live(&self, token: &MountToken) -> bool {
        let inner = self.lock();
        inner.live && inner.generation == token.generation
    }

    /// Commit a settled fetch, guarded by the mount token
    pub fn commit(&self, token: &MountToken, settled: Settled) -> CommitOutcome {
        let mut inner = self.lock();
        if !inner.live || inner.generation != token.generation {
            return CommitOutcome::Stale;
        }
        if !inner.state.is_unloaded() {
            return CommitOutcome::AlreadySettled;
        }
        inner.state = settled.into();
        CommitOutcome::Committed
    }

    /// Current state (cheap clone; the snapshot is shared)
    pub fn state(&self) -> LoadState {
        self.lock().state.clone()
    }

    /// The loaded snapshot, if any
    pub fn snapshot(&self) -> Option<Arc<PortfolioSnapshot>> {
        match &self.lock().state {
            LoadState::Loaded(loaded) => Some(loaded.shared()),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}

/// A mount that unmounts itself on drop
///
/// Dropping the guard (for instance when a request future is cancelled)
/// makes every later commit with its token `Stale`.
#[derive(Debug)]
pub struct MountGuard {
    slot: StateSlot,
    token: MountToken,
}

impl MountGuard {
    pub fn token(&self) -> &MountToken {
        &self.token
    }

    pub fn slot(&self) -> &StateSlot {
        &self.slot
    }

    pub fn state(&self) -> LoadState {
        self.slot.state()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.slot.unmount(&self.token);
    }
}
