pub mod invariants;

pub use invariants::{check_snapshot, Violation};
