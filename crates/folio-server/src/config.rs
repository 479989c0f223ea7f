//! Layered service configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `folio.toml`, `FOLIO_*` environment variables, then bare `HOST` and
//! `PORT` from the hosting environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, File};
use folio_core::logging_facility::Profile;
use serde::Deserialize;

use crate::errors::{config_error, invalid_config, Result};

pub const CONFIG_FILE: &str = "folio.toml";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Path of the Data Store document below the public directory
pub const DATA_FILE: &str = "data/portfolio.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    /// Fetch the Data Store over HTTP instead of reading it from `public_dir`
    #[serde(default)]
    pub data_url: Option<String>,
    pub fetch_timeout_ms: u64,
    pub log_profile: Profile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            data_url: None,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            log_profile: Profile::Development,
        }
    }
}

impl ServerConfig {
    /// Load from defaults, `folio.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_with_file(Path::new(CONFIG_FILE))
    }

    /// Load from defaults, `path` and the environment
    ///
    /// An empty `HOST` or `PORT` counts as unset.
    pub fn load_with_file(path: &Path) -> Result<Self> {
        let builder = Self::base(path)?
            .add_source(Environment::with_prefix("FOLIO"))
            .set_override_option("host", non_empty_var("HOST"))
            .map_err(config_error)?
            .set_override_option("port", non_empty_var("PORT"))
            .map_err(config_error)?;
        Self::finish(builder)
    }

    /// Load from defaults and `path` only, ignoring the environment
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::finish(Self::base(path)?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn data_file(&self) -> PathBuf {
        self.public_dir.join(DATA_FILE)
    }

    fn base(path: &Path) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)
            .and_then(|b| b.set_default("port", i64::from(DEFAULT_PORT)))
            .and_then(|b| b.set_default("public_dir", DEFAULT_PUBLIC_DIR))
            .and_then(|b| b.set_default("fetch_timeout_ms", DEFAULT_FETCH_TIMEOUT_MS))
            .and_then(|b| b.set_default("log_profile", "development"))
            .map(|b| b.add_source(File::from(path).required(false)))
            .map_err(config_error)
    }

    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(invalid_config("host", "must not be empty"));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(invalid_config("fetch_timeout_ms", "must be greater than zero"));
        }
        if let Some(url) = &self.data_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid_config("data_url", "must be an http(s) URL"));
            }
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
