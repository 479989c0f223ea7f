// Test doubles for the DataSource seam, shared by the loader suites
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::errors::{ExError, ExErrorKind};
use folio_loader::{DataSource, FetchResponse};
use tokio::sync::Notify;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_bytes(name: &str) -> Vec<u8> {
    std::fs::read(fixture(name)).expect("fixture readable")
}

/// Answers the same response every time and counts calls
pub struct CannedSource {
    response: FetchResponse,
    pub calls: Arc<AtomicUsize>,
}

impl CannedSource {
    pub fn new(response: FetchResponse) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DataSource for CannedSource {
    async fn fetch(&self) -> folio_loader::Result<FetchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    fn describe(&self) -> String {
        "canned".to_string()
    }
}

/// Fails every fetch at the transport level
pub struct UnreachableSource;

#[async_trait]
impl DataSource for UnreachableSource {
    async fn fetch(&self) -> folio_loader::Result<FetchResponse> {
        Err(ExError::new(ExErrorKind::Transport).with_message("connection refused"))
    }

    fn describe(&self) -> String {
        "unreachable".to_string()
    }
}

/// Holds every fetch until the gate is opened
pub struct GatedSource {
    pub gate: Arc<Notify>,
    response: FetchResponse,
}

impl GatedSource {
    pub fn new(response: FetchResponse) -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            response,
        }
    }
}

#[async_trait]
impl DataSource for GatedSource {
    async fn fetch(&self) -> folio_loader::Result<FetchResponse> {
        self.gate.notified().await;
        Ok(self.response.clone())
    }

    fn describe(&self) -> String {
        "gated".to_string()
    }
}
