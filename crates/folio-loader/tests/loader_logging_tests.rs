#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{fixture_bytes, CannedSource};
use folio_core::lifecycle::StateSlot;
use folio_core::logging_facility::test_capture::init_test_capture;
use folio_core_types::schema::{EVENT_COMMIT, EVENT_END, EVENT_END_ERROR, EVENT_START};
use folio_loader::{FetchResponse, PortfolioLoader};

const OP: &str = "load_portfolio";

#[tokio::test]
async fn test_successful_load_logs_start_end_and_commit() {
    let capture = init_test_capture();
    let loader = PortfolioLoader::from_source(CannedSource::new(FetchResponse::ok(
        fixture_bytes("portfolio_minimal.json"),
    )));
    let slot = StateSlot::new();

    let (guard, _) = loader.mount(&slot).await;

    let mount_id = guard.token().mount_id().to_string();
    let events = capture.events_with(OP, "mount_id", &mount_id);
    let kinds: Vec<_> = events.iter().filter_map(|e| e.event()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END, EVENT_COMMIT]);

    let end = &events[1];
    assert_eq!(end.field("projects_len"), Some("2"));
    assert_eq!(end.field("digest").map(str::len), Some(64));
}

#[tokio::test]
async fn test_failed_load_logs_error_code_and_status() {
    let capture = init_test_capture();
    let loader = PortfolioLoader::from_source(CannedSource::new(FetchResponse::with_status(503)));
    let slot = StateSlot::new();

    let (guard, _) = loader.mount(&slot).await;

    let mount_id = guard.token().mount_id().to_string();
    let events = capture.events_with(OP, "mount_id", &mount_id);
    let error = events
        .iter()
        .find(|e| e.event() == Some(EVENT_END_ERROR))
        .expect("error event captured");
    assert_eq!(error.field("err.code"), Some("ERR_RESPONSE"));
    assert_eq!(error.field("status"), Some("503"));
}
