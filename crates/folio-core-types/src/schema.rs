//! Field and event names shared by the log macros and the test capture
//!
//! Only the framing fields live here. Operation-specific fields are written
//! inline at the call site, since tracing needs them as identifiers.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

/// An operation began
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
/// A load result was written into its mount's slot
pub const EVENT_COMMIT: &str = "commit";
/// A load result arrived after its mount ended and was dropped
pub const EVENT_STALE: &str = "stale";
