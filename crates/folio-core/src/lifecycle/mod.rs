//! Mount-scoped data lifecycle
//!
//! A view mount owns one [`StateSlot`]. The slot starts `Unloaded`, accepts at
//! most one settling commit per mount, and rejects commits carrying a token
//! from an unmounted or superseded mount.

pub mod load_state;
pub mod slot;

pub use load_state::{FailureKind, LoadFailure, LoadState, LoadedSnapshot, Settled};
pub use slot::{CommitOutcome, MountGuard, MountToken, StateSlot};
