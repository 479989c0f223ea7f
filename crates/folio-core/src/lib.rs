//! Folio Core - portfolio domain kernel
//!
//! This crate provides the in-memory model and the pure logic behind the
//! portfolio site:
//! - PortfolioSnapshot and its parts, in the Data Store's wire shape
//! - The mount-scoped load lifecycle (`LoadState`, `StateSlot`)
//! - Project filter derivation and selection correction
//! - Snapshot invariant checks
//! - Page view models for the homepage, CV and projects gallery
//! - The error and structured logging facilities shared by the workspace

pub mod errors;
pub mod filter;
pub mod lifecycle;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod views;

// Macros resolve schema constants through this path
pub use folio_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, FolioError, Result};
pub use filter::FilterSelection;
pub use lifecycle::{LoadState, MountGuard, MountToken, StateSlot};
pub use model::{FilterLabel, PortfolioSnapshot, Project, ProjectCategory};
