//! Folio Server - hosting entry point for the portfolio site
//!
//! Wires configuration, the Data Store source, handlebars page rendering and
//! static asset delivery into one axum router.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

pub use crate::config::ServerConfig;
pub use errors::{ApiError, Result};
pub use router::build_router;
pub use state::AppState;

/// Build the full application for `config`
pub fn app(config: &ServerConfig) -> Result<axum::Router> {
    let state = AppState::from_config(config)?;
    Ok(build_router(state, &config.public_dir))
}
