//! Shared application state

use std::sync::Arc;

use folio_core::lifecycle::StateSlot;
use folio_core::PortfolioSnapshot;
use folio_loader::{DataSource, FileDataSource, HttpDataSource, PortfolioLoader};

use crate::config::ServerConfig;
use crate::errors::Result;
use crate::render::Renderer;

/// Per-process state handed to every handler
///
/// Holds no portfolio data: each page mount fetches its own snapshot.
#[derive(Clone)]
pub struct AppState {
    pub loader: PortfolioLoader,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(loader: PortfolioLoader, renderer: Renderer) -> Self {
        Self {
            loader,
            renderer: Arc::new(renderer),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let loader = PortfolioLoader::new(build_source(config)?);
        tracing::info!(source = %loader.source().describe(), "data store source configured");
        Ok(Self::new(loader, Renderer::new()?))
    }

    /// Mount a fresh slot, run its load and hand back what it settled on
    ///
    /// The mount ends when this returns; the snapshot outlives it only as the
    /// caller's `Arc`.
    pub async fn mount_snapshot(&self) -> Option<Arc<PortfolioSnapshot>> {
        let slot = StateSlot::new();
        let (_guard, _) = self.loader.mount(&slot).await;
        slot.snapshot()
    }
}

pub fn build_source(config: &ServerConfig) -> Result<Arc<dyn DataSource>> {
    Ok(match &config.data_url {
        Some(url) => Arc::new(HttpDataSource::new(url.clone(), config.fetch_timeout())?),
        None => Arc::new(FileDataSource::new(config.data_file())),
    })
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("loader", &self.loader)
            .finish_non_exhaustive()
    }
}
