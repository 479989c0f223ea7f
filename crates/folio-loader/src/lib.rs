//! Folio Loader - Data Store access and the per-mount load cycle
//!
//! Provides:
//! - The `DataSource` seam with HTTP and file implementations
//! - Structural parsing of the portfolio document
//! - `PortfolioLoader`, which fetches once per mount and commits the
//!   outcome into the mount's state slot only while the mount is live

pub mod errors;
pub mod loader;
pub mod parser;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use loader::PortfolioLoader;
pub use source::{DataSource, FetchResponse, FileDataSource, HttpDataSource};
