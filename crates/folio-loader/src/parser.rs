//! Structural parsing of the portfolio document

use folio_core::model::PortfolioSnapshot;
use sha2::{Digest, Sha256};

use crate::errors::{parse_error, Result};

/// Parse a Data Store body into a snapshot
///
/// Only the structure is checked: every documented key must be present with
/// the documented type. Semantic invariants are left to
/// `folio_core::rules::check_snapshot`.
pub fn parse_snapshot(body: &[u8]) -> Result<PortfolioSnapshot> {
    serde_json::from_slice(body).map_err(parse_error)
}

/// SHA-256 of the body, hex encoded
pub fn body_digest(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}
