//! Client configuration.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Public reqres endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api/";

/// Config file picked up from the working directory by [`ClientConfig::load`].
const CONFIG_FILE: &str = "reqres.toml";

/// Environment variable prefix (`REQRES_BASE_URL`, `REQRES_API_KEY`).
const ENV_PREFIX: &str = "REQRES";

/// Configuration for connecting to a reqres service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as `x-api-key` on every request when set
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Load configuration from `reqres.toml` (if present) and environment.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE);
        let file = config_path.exists().then_some(config_path);
        Self::build(file.as_deref(), None)
    }

    /// Load configuration from a specific file, then environment.
    ///
    /// The file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ClientError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::build(Some(path), None)
    }

    /// Build from an optional file and an explicit environment map instead of
    /// the process environment.
    pub fn load_with_env(path: Option<&Path>, env: HashMap<String, String>) -> Result<Self> {
        Self::build(path, Some(env))
    }

    fn build(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        // Override with environment variables (prefixed with REQRES_)
        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).source(env));

        let config = settings
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        url::Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;

        if matches!(&self.api_key, Some(key) if key.trim().is_empty()) {
            return Err(ClientError::Config("API key cannot be blank".into()));
        }

        Ok(())
    }

    /// Base URL with exactly one trailing slash, so paths can be appended.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim().trim_end_matches('/'))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
