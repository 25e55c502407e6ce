use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Directory holding the config file and the session file.
///
/// `~/.config/billfold` on Unix/macOS, or the platform equivalent via
/// `dirs::config_dir()`. Falls back to the current directory if no
/// config dir is available.
pub fn app_dir() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("billfold")
}

impl Config {
    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The server URL carries an http(s) scheme
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.server.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("Server URL '{}' must start with http:// or https://", url),
            });
        }

        if self.server.connect_timeout_secs == 0 || self.server.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI tick interval must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from(&dir.path().join("nope.toml")).expect("defaults");
        assert_eq!(config.server.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.server.request_timeout_secs, 150);
        assert_eq!(config.ui.currency_symbol, "$");
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbase_url = \"https://ledger.example.com\"\n")
            .expect("write config");

        let config = Config::load_from(&path).expect("loads");
        assert_eq!(config.server.base_url, "https://ledger.example.com");
        assert_eq!(config.server.connect_timeout_secs, 10);
        assert_eq!(config.ui.tick_ms, 250);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nbase_url = 3").expect("write config");

        match Config::load_from(&path) {
            Err(ConfigError::ParseError { .. }) => {}
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn bad_scheme_fails_validation() {
        let config = Config {
            server: crate::config::ServerConfig {
                base_url: "ftp://ledger".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("http"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
