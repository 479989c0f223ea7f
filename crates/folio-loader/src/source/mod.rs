//! Data Store sources
//!
//! A source performs one uncached read of the Data Store per call. It
//! reports transport problems as errors and hands back whatever status and
//! body it got; classifying the status is the loader's job.

mod file;
mod http;

pub use file::FileDataSource;
pub use http::HttpDataSource;

use async_trait::async_trait;

use crate::errors::Result;

/// Raw answer from a Data Store read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One place the portfolio document can be read from
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Read the document, bypassing every cache on the way
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error when the store cannot be reached.
    async fn fetch(&self) -> Result<FetchResponse>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(FetchResponse::ok("{}").is_success());
        assert!(FetchResponse::with_status(204).is_success());
        assert!(!FetchResponse::with_status(304).is_success());
        assert!(!FetchResponse::with_status(500).is_success());
    }
}
