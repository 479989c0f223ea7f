#![allow(clippy::unwrap_used, clippy::expect_used)]

use folio_core::errors::{ExError, ExErrorKind, FolioError};
use folio_core::logging_facility::init_test_capture;
use folio_core::{log_op_end, log_op_error, log_op_start};
use folio_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use tracing::Level;

#[test]
fn test_start_carries_extra_fields() {
    let capture = init_test_capture();

    log_op_start!("logging_start_fields", mount_id = "m-1");

    let events = capture.events_with("logging_start_fields", "mount_id", "m-1");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event(), Some(EVENT_START));
    assert_eq!(events[0].level, Level::INFO);
    assert!(events[0]
        .component()
        .is_some_and(|c| c.contains("logging_facility_tests")));
}

#[test]
fn test_start_without_fields() {
    let capture = init_test_capture();

    log_op_start!("logging_start_bare");

    assert_eq!(capture.events_for("logging_start_bare").len(), 1);
}

#[test]
fn test_end_records_duration() {
    let capture = init_test_capture();

    log_op_end!("logging_end", duration_ms = 42);

    let events = capture.events_for("logging_end");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_error_from_domain_error_carries_code() {
    let capture = init_test_capture();

    log_op_error!("logging_error_domain", FolioError::SnapshotUnavailable, duration_ms = 10);

    let events = capture.events_for("logging_error_domain");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field("err.code"), Some("ERR_UNAVAILABLE"));
}

#[test]
fn test_error_from_ex_error_keeps_extra_fields() {
    let capture = init_test_capture();

    let err = ExError::new(ExErrorKind::Response).with_status(500);
    log_op_error!("logging_error_ex", err, duration_ms = 3, status = 500u64);

    let events = capture.events_with("logging_error_ex", "status", "500");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("err.code"), Some("ERR_RESPONSE"));
    assert_eq!(events[0].field("err.kind"), Some("Response"));
}
