//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tasbeeh_core::SystemClock;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,

    /// Fixed calendar offset from UTC in minutes. Uses the machine timezone when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("tasbeeh.db"),
            utc_offset_minutes: None,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TASBEEH_*)
        figment = figment.merge(Env::prefixed("TASBEEH_"));

        figment.extract()
    }

    /// Builds the calendar clock this configuration asks for.
    pub fn clock(&self) -> anyhow::Result<SystemClock> {
        match self.utc_offset_minutes {
            None => Ok(SystemClock::local()),
            Some(minutes) => SystemClock::from_offset_minutes(minutes).ok_or_else(|| {
                anyhow::anyhow!("utc_offset_minutes out of range: {minutes}")
            }),
        }
    }
}

/// Returns the platform-specific config directory for tasbeeh.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tasbeeh"))
}

/// Returns the platform-specific data directory for tasbeeh.
///
/// On Linux: `~/.local/share/tasbeeh`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("tasbeeh"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_ends_with_tasbeeh() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "tasbeeh");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_db() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.database_path, data_dir.join("tasbeeh.db"));
        assert_eq!(config.utc_offset_minutes, None);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "database_path = \"/tmp/custom.db\"\nutc_offset_minutes = 180\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/custom.db"));
        assert_eq!(config.utc_offset_minutes, Some(180));
        assert!(config.clock().is_ok());
    }

    #[test]
    fn test_out_of_range_offset_is_rejected() {
        let config = Config {
            database_path: PathBuf::from("tasbeeh.db"),
            utc_offset_minutes: Some(24 * 60),
        };
        assert!(config.clock().is_err());
    }
}
