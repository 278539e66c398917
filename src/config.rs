use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fetcher::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Outbound request settings for the inspector.
///
/// The core API is a pure function of the URL; this only tunes how the
/// requests are made.
#[derive(Debug, Deserialize, Clone)]
pub struct InspectorConfig {
    /// Per-request timeout in seconds, applied to the page fetch and to
    /// every probe
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User agent sent with every outbound request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl InspectorConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SEO_INSPECT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SEO_INSPECT__TIMEOUT_SECS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("SEO_INSPECT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
