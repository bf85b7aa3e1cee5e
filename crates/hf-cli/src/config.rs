//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File name the tracker persists its state under.
pub const DATA_FILE_NAME: &str = "heyfocus_data.json";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the tracker's data file.
    pub data_path: PathBuf,
    /// Show the sample day when the log is empty.
    pub demo_when_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_path: data_dir.join(DATA_FILE_NAME),
            demo_when_empty: true,
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

        // Load from environment variables (HF_*)
        figment = figment.merge(Env::prefixed("HF_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for hf.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("heyfocus"))
}

/// Returns the directory the tracker application stores its data in.
///
/// On Linux: `~/.local/share/com.heyfocus.app`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("com.heyfocus.app"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_returns_some() {
        assert!(dirs_data_path().is_some());
    }

    #[test]
    fn test_dirs_data_path_ends_with_app_id() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "com.heyfocus.app");
    }

    #[test]
    fn test_default_config_uses_data_dir() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.data_path, data_dir.join(DATA_FILE_NAME));
        assert!(config.demo_when_empty);
    }

    #[test]
    fn test_config_debug_shows_fields() {
        let config = Config {
            data_path: PathBuf::from("/tmp/focus.json"),
            demo_when_empty: false,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("/tmp/focus.json"));
        assert!(debug.contains("demo_when_empty: false"));
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(
            &config_path,
            "data_path = \"/tmp/focus.json\"\ndemo_when_empty = false\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/tmp/focus.json"));
        assert!(!config.demo_when_empty);
    }
}
