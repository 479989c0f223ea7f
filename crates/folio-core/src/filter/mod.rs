//! Project filter derivation
//!
//! Computes the visible project list for a snapshot and a selection, and
//! keeps the selection valid against the snapshot's filter list.

pub mod derive;
pub mod selection;

pub use derive::{derive_view, visible_projects};
pub use selection::FilterSelection;
