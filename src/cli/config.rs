//! Configuration management for SHEra
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.shera/config.toml

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::args::Verbosity;
use crate::errors::{Result, SheraError};
use crate::risk::IndicatorLabels;

/// Complete configuration for SHEra
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Extra indicator labels keyed by question id
    #[serde(default)]
    pub indicators: BTreeMap<String, String>,
}

/// File system paths configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub data_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_table: Option<String>,
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub default_verbosity: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.shera".to_string(),
            question_table: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SheraError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| SheraError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from ~/.shera/config.toml if present, otherwise built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".shera").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.paths.data_dir.trim().is_empty() {
            return Err(SheraError::ConfigError(
                "data_dir must not be empty".to_string(),
            ));
        }

        if Verbosity::parse(&self.display.default_verbosity).is_none() {
            return Err(SheraError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.display.default_verbosity
            )));
        }

        if let Some((id, _)) = self.indicators.iter().find(|(_, label)| label.trim().is_empty()) {
            return Err(SheraError::ConfigError(format!(
                "Indicator label for {} must not be empty",
                id
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SheraError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SheraError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SheraError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get data directory path
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.data_dir)
    }

    /// Configured question table, if any
    pub fn question_table(&self) -> Option<PathBuf> {
        self.paths.question_table.as_deref().map(Self::expand_path)
    }

    pub fn default_verbosity(&self) -> Verbosity {
        Verbosity::parse(&self.display.default_verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Default indicator labels plus configured overrides
    pub fn indicator_labels(&self) -> IndicatorLabels {
        let mut labels = IndicatorLabels::default();
        labels.extend(self.indicators.clone());
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.data_dir, "~/.shera");
        assert!(config.display.color_output);
        assert!(config.indicators.is_empty());
        assert!(config.question_table().is_none());
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_verbosity() {
        let mut config = Config::default();
        config.display.default_verbosity = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_data_dir() {
        let mut config = Config::default();
        config.paths.data_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [indicators]
            self_harm = "Thoughts of self-harm"
            "#,
        )
        .unwrap();
        assert_eq!(config.paths, PathsConfig::default());
        assert_eq!(config.display, DisplayConfig::default());

        let labels = config.indicator_labels();
        assert_eq!(labels.overrides()["self_harm"], "Thoughts of self-harm");
        assert!(labels.overrides().contains_key("family_history"));
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.paths.data_dir = "/var/lib/shera".to_string();
        config.paths.question_table = Some("/etc/shera/questions.toml".to_string());
        config.display.default_verbosity = "verbose".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.data_dir(), PathBuf::from("/var/lib/shera"));
        assert_eq!(loaded.default_verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(Some(temp.path().join("absent.toml").as_path())).is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/.shera");
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let path = "/absolute/path";
        assert_eq!(Config::expand_path(path).to_string_lossy(), path);
    }
}
