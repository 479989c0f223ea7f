//! Route handlers
//!
//! Page handlers mount a fresh snapshot per request and fall back to the
//! placeholder page whenever the snapshot is absent.

pub mod api;
pub mod health;
pub mod pages;

/// Raw query pairs, repeated keys included
pub type QueryPairs = Vec<(String, String)>;

/// First `category` value of the query string, if any
pub fn category_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str())
}
