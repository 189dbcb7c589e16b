#![deny(unsafe_code)]

//! Configuration loading and validation for mulscan.
//!
//! Loads an optional `mulscan.toml` and validates it. Every section and key
//! has a default, so an empty file (or no file at all) yields a configuration
//! that reads `input.txt` and keeps the match log disabled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Log levels accepted by `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Puzzle input configuration.
    #[serde(default)]
    pub input: InputConfig,

    /// Match log configuration.
    #[serde(default)]
    pub match_log: MatchLogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the text to scan comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path of the text file to scan.
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

/// The optional append-only log of every counted `mul(a,b)` literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLogConfig {
    /// Whether matched literals are appended to the log file.
    #[serde(default)]
    pub enabled: bool,

    /// Path of the log file. Opened in append mode, never truncated.
    #[serde(default = "default_match_log_path")]
    pub path: PathBuf,
}

impl Default for MatchLogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_match_log_path(),
        }
    }
}

fn default_match_log_path() -> PathBuf {
    PathBuf::from("output_me.txt")
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "input.path must not be empty".to_string(),
            ));
        }
        if self.match_log.enabled && self.match_log.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "match_log.path must not be empty when match_log.enabled is set".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.input.path, PathBuf::from("input.txt"));
        assert!(!config.match_log.enabled);
        assert_eq!(config.match_log.path, PathBuf::from("output_me.txt"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.input.path, PathBuf::from("input.txt"));
        assert!(!config.match_log.enabled);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [input]
            path = "puzzles/day3.txt"

            [match_log]
            enabled = true
            path = "logs/muls.txt"

            [logging]
            level = "debug"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.input.path, PathBuf::from("puzzles/day3.txt"));
        assert!(config.match_log.enabled);
        assert_eq!(config.match_log.path, PathBuf::from("logs/muls.txt"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml = r#"
            [match_log]
            enabled = true
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert!(config.match_log.enabled);
        assert_eq!(config.match_log.path, PathBuf::from("output_me.txt"));
    }

    #[test]
    fn test_validation_rejects_empty_input_path() {
        let toml = r#"
            [input]
            path = ""
        "#;
        let result = AppConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_empty_log_path_when_enabled() {
        let toml = r#"
            [match_log]
            enabled = true
            path = ""
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_empty_log_path_allowed_when_disabled() {
        let toml = r#"
            [match_log]
            path = ""
        "#;
        assert!(AppConfig::parse(toml).is_ok());
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let toml = r#"
            [logging]
            level = "verbose"
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_serialize_roundtrip_preserves_values() {
        let mut config = AppConfig::default();
        config.match_log.enabled = true;
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::parse(&rendered).unwrap();
        assert!(parsed.match_log.enabled);
        assert_eq!(parsed.input.path, config.input.path);
    }

    // ── File-based loading ────────────────────────────────────────────

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mulscan.toml");
        std::fs::write(&path, b"[input]\npath = \"day3.txt\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.input.path, PathBuf::from("day3.txt"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = AppConfig::load(Path::new("/nonexistent/mulscan.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, b"not valid toml [[[").unwrap();

        let result = AppConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bad value".to_string());
        assert_eq!(err.to_string(), "validation error: bad value");
    }
}
