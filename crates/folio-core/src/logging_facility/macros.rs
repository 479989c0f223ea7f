//! Operation bracketing macros
//!
//! Every macro stamps `component` with the calling module and `event` with
//! one of the schema event names. Extra `key = value` fields pass straight
//! through to `tracing`.

/// `start` event for `op`
///
/// ```
/// # use folio_core::log_op_start;
/// log_op_start!("load_portfolio", mount_id = "m-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::folio_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// `end` event for `op`; `duration_ms` is required
///
/// ```
/// # use folio_core::log_op_end;
/// log_op_end!("load_portfolio", duration_ms = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::folio_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// `end_error` event for `op`
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// land in `err.kind` and `err.code`.
///
/// ```
/// # use folio_core::{log_op_error, errors::FolioError};
/// log_op_error!("render_page", FolioError::SnapshotUnavailable, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::folio_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
