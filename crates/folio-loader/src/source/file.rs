use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{DataSource, FetchResponse};
use crate::errors::{transport_error, Result};

/// Data Store read straight from disk
///
/// The file is read on every fetch; nothing is kept between calls. A
/// missing file answers 404 the way a static file server would.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch(&self) -> Result<FetchResponse> {
        match tokio::fs::read(&self.path).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse::with_status(404)),
            Err(e) => Err(transport_error(&self.describe(), e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
