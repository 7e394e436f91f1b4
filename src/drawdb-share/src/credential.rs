//! Bearer credentials for the document store.
//!
//! Nothing in this crate reads ambient storage on its own: callers resolve a
//! [`Credential`] from a [`SettingsStore`] and hand it to the client.

use crate::{Result, ShareError};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings key holding the user's personal access token.
pub const TOKEN_SETTINGS_KEY: &str = "github_token";

/// Token baked in at build time, used when the user has not set one.
pub const BUILD_DEFAULT_TOKEN: Option<&str> = option_env!("DRAWDB_GITHUB_TOKEN");

/// Bearer token for the document store.
#[derive(Clone)]
pub struct Credential {
    token: SecretString,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into().into()),
        }
    }

    /// Credential compiled into the binary, if any.
    pub fn from_build_env() -> Option<Self> {
        BUILD_DEFAULT_TOKEN
            .filter(|token| !token.trim().is_empty())
            .map(Self::new)
    }

    /// Stored user token if set, otherwise `default`.
    pub fn resolve(store: &dyn SettingsStore, default: Option<Credential>) -> Option<Self> {
        match store.get(TOKEN_SETTINGS_KEY) {
            Some(token) if !token.trim().is_empty() => {
                debug!("Using share token from user settings");
                Some(Self::new(token.trim()))
            }
            _ => default,
        }
    }

    /// Header value for `Authorization`.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

/// Read-only lookup of persisted user settings.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory settings, mostly for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Settings persisted as a flat TOML table, e.g. `~/.drawdb/settings.toml`.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    values: toml::Table,
}

impl FileSettings {
    /// Load settings from `path`. A missing file yields empty settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => content.parse::<toml::Table>()?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(e) => {
                return Err(ShareError::Config(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };
        Ok(Self { path, values })
    }

    /// Settings file in the application config directory.
    pub fn load_default() -> Result<Self> {
        let dirs = drawdb_common::get_app_dirs().ok_or_else(|| {
            ShareError::Config("Could not determine application directory".to_string())
        })?;
        Self::load(dirs.settings_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string)
    }
}
