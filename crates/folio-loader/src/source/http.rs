use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use super::{DataSource, FetchResponse};
use crate::errors::{source_config_error, transport_error, Result};

/// Data Store served over HTTP
///
/// Every request asks intermediaries for a fresh copy.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDataSource {
    /// Build a source for `url` with a whole-request timeout
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(source_config_error)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<FetchResponse> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| transport_error(&self.url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&self.url, e))?;

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
