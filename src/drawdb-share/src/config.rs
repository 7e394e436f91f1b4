//! Share configuration, read from `share.toml`.

use crate::{
    DEFAULT_GIST_API, DEFAULT_SHARE_LOCATION, Result, SHARE_DESCRIPTION, SHARE_FILENAME,
    ShareError,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Configuration for the share subsystem. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Document store API root.
    pub api_url: String,
    /// Page location share links are built from.
    pub base_location: String,
    /// Description label stored on each record.
    pub description: String,
    /// Name of the content blob inside the record.
    pub filename: String,
    /// Whether created records are publicly listed.
    pub public: bool,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GIST_API.to_string(),
            base_location: DEFAULT_SHARE_LOCATION.to_string(),
            description: SHARE_DESCRIPTION.to_string(),
            filename: SHARE_FILENAME.to_string(),
            public: false,
            timeout_secs: drawdb_common::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ShareConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loading share config from {}", path.display());
                Self::from_toml_str(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ShareError::Config(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Load `share.toml` from the application config directory.
    pub fn load_default() -> Result<Self> {
        match drawdb_common::get_app_dirs() {
            Some(dirs) => Self::load(dirs.share_config_file()),
            None => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ShareError::Config("api_url must not be empty".to_string()));
        }
        if self.filename.trim().is_empty() {
            return Err(ShareError::Config("filename must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ShareError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
