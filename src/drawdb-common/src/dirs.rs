//! Application directories for the share tooling.
//!
//! - Linux/macOS: `~/.drawdb`
//! - Windows: `%APPDATA%\drawdb`
//!
//! `DRAWDB_HOME` overrides the location on every platform.

use std::path::PathBuf;

/// Application name for directory paths
pub const APP_NAME: &str = "drawdb";

/// Home directory name on Linux/macOS
pub const HOME_DIR_NAME: &str = ".drawdb";

/// Environment variable overriding the application home.
pub const HOME_ENV_VAR: &str = "DRAWDB_HOME";

/// Application directories structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Directory holding `share.toml` and `settings.toml`
    pub config_dir: PathBuf,
}

impl AppDirs {
    /// Resolve application directories, honoring `DRAWDB_HOME`.
    ///
    /// A relative `DRAWDB_HOME` is resolved against the current directory.
    pub fn new() -> Option<Self> {
        if let Ok(home) = std::env::var(HOME_ENV_VAR)
            && !home.trim().is_empty()
        {
            let home = PathBuf::from(home);
            let home = if home.is_relative() {
                std::env::current_dir().ok()?.join(home)
            } else {
                home
            };
            return Some(Self { config_dir: home });
        }

        #[cfg(target_os = "windows")]
        let config_dir = dirs::config_dir()?.join(APP_NAME);

        #[cfg(not(target_os = "windows"))]
        let config_dir = dirs::home_dir()?.join(HOME_DIR_NAME);

        Some(Self { config_dir })
    }

    /// Share configuration file (`share.toml`)
    pub fn share_config_file(&self) -> PathBuf {
        self.config_dir.join("share.toml")
    }

    /// Persisted user settings (`settings.toml`)
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }
}

/// Get application directories (convenience function)
pub fn get_app_dirs() -> Option<AppDirs> {
    AppDirs::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_override() {
        let test_path = std::env::temp_dir().join("test-drawdb");
        // SAFETY: serialized with the other env-mutating tests
        unsafe {
            std::env::set_var(HOME_ENV_VAR, &test_path);
        }
        let dirs = AppDirs::new().unwrap();
        assert_eq!(dirs.config_dir, test_path);
        assert!(dirs.share_config_file().ends_with("share.toml"));
        assert!(dirs.settings_file().ends_with("settings.toml"));
        unsafe {
            std::env::remove_var(HOME_ENV_VAR);
        }
    }
}
