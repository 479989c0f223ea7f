//! Core types shared across Folio facilities
//!
//! This crate provides foundational types used by the error, logging and
//! loading facilities:
//!
//! - **Correlation types**: RequestId, MountId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{MountId, RequestId};
