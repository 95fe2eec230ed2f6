//! Configuration management for tabtree
//!
//! This module handles loading, parsing, and managing configuration from
//! various sources:
//! - Configuration file (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Installation directory overrides
    #[serde(default)]
    pub install: InstallConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Installation-related configuration
///
/// Every field is optional; unset fields fall back to the conventional
/// per-user locations resolved at install time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Override for the fish completions directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fish_completions_dir: Option<PathBuf>,

    /// Override for the bash completions directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bash_completions_dir: Option<PathBuf>,

    /// Override for the bash loader file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bash_loader_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Include timestamps in log output
    #[serde(default)]
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            timestamps: false,
        }
    }
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

/// Log level options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to a tracing level
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl Config {
    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tabtree")
            .join("config.toml")
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist; the default path falls back to the
    /// default configuration when absent.
    ///
    /// # Arguments
    /// * `path` - Explicit config file path, or `None` for the default
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
                Self::parse(&text)
            }
            None => {
                let path = Self::default_config_path();
                if !path.exists() {
                    return Ok(Config::default());
                }
                let text = fs::read_to_string(&path)?;
                Self::parse(&text)
            }
        }
    }

    /// Parse configuration from TOML text
    fn parse(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Validate the configuration
    ///
    /// Directory overrides must be absolute; the installer resolves
    /// nothing relative to the working directory.
    pub fn validate(&self) -> Result<()> {
        let overrides = [
            ("install.fish_completions_dir", &self.install.fish_completions_dir),
            ("install.bash_completions_dir", &self.install.bash_completions_dir),
            ("install.bash_loader_file", &self.install.bash_loader_file),
        ];

        for (field, value) in overrides {
            if let Some(path) = value {
                if path.is_relative() {
                    return Err(ConfigError::InvalidValue {
                        field: field.to_owned(),
                        value: path.display().to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Serialize the effective configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabtreeError;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.install.fish_completions_dir.is_none());
        assert!(config.install.bash_completions_dir.is_none());
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(!config.logging.timestamps);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [install]
            fish_completions_dir = "/srv/fish/completions"
            bash_completions_dir = "/srv/bash_completions"

            [logging]
            level = "debug"
            timestamps = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.install.fish_completions_dir,
            Some(PathBuf::from("/srv/fish/completions"))
        );
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.timestamps);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = Config::parse("[logging]\nlevel = \"info\"\n").unwrap();

        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.install.bash_loader_file.is_none());
    }

    #[test]
    fn test_parse_invalid_toml_fails() {
        let err = Config::parse("[logging\nlevel = ").unwrap_err();
        assert!(matches!(
            err,
            TabtreeError::Config(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_unknown_level_fails() {
        assert!(Config::parse("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_validate_rejects_relative_override() {
        let mut config = Config::default();
        config.install.bash_completions_dir = Some(PathBuf::from("relative/dir"));

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            TabtreeError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_absolute_override() {
        let mut config = Config::default();
        config.install.fish_completions_dir = Some(PathBuf::from("/abs/dir"));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = Config::load_from_file(Some(Path::new("/nonexistent/tabtree.toml"))).unwrap_err();
        assert!(matches!(
            err,
            TabtreeError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let mut config = Config::default();
        config.install.fish_completions_dir = Some(PathBuf::from("/srv/fish"));
        config.logging.level = LogLevel::Trace;

        let text = config.to_toml().unwrap();
        let parsed = Config::parse(&text).unwrap();

        assert_eq!(parsed.install.fish_completions_dir, Some(PathBuf::from("/srv/fish")));
        assert_eq!(parsed.logging.level, LogLevel::Trace);
    }

    #[test]
    fn test_to_toml_skips_unset_overrides() {
        let text = Config::default().to_toml().unwrap();
        assert!(!text.contains("fish_completions_dir"));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }
}
