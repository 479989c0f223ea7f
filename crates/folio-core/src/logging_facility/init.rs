use std::sync::Once;

use serde::Deserialize;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output flavour, selected by the `log_profile` config key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Pretty lines, `folio=debug`
    #[default]
    Development,
    /// JSON lines, `folio=info`
    Production,
    /// Bare registry; tests install the capture layer themselves
    Test,
}

impl Profile {
    fn default_directives(&self) -> &'static str {
        match self {
            Profile::Development => "folio=debug,tower_http=debug",
            Profile::Production | Profile::Test => "folio=info,tower_http=info",
        }
    }
}

static INSTALLED: Once = Once::new();

/// Install the global subscriber; only the first call has any effect
///
/// `RUST_LOG` replaces the profile's default directives when set.
pub fn init(profile: Profile) {
    INSTALLED.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_directives()))
        };
        match profile {
            Profile::Development => tracing_subscriber::fmt().with_env_filter(filter()).init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter())
                .init(),
            Profile::Test => tracing_subscriber::registry().init(),
        }
    });
}
