//! Structured logging for the workspace
//!
//! `init` installs the process subscriber for a [`Profile`]. The
//! `log_op_*` macros bracket an operation with `start`, `end` or
//! `end_error` events carrying `component`, `op` and `duration_ms`.
//! [`init_test_capture`] swaps in an in-memory subscriber for tests.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
