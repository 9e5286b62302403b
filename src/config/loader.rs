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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bethere/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bethere").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must be http(s)", self.api.base_url),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.session.user_id.is_empty() || self.session.username.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "session.user_id and session.username must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/bethere.toml")).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.session.username, "spyros");
        assert_eq!(config.session.role, Role::Regular);
    }

    #[test]
    fn parses_full_config() {
        let file = write_config(
            r#"
            [api]
            base_url = "https://api.bethere.example"
            timeout_seconds = 10

            [session]
            user_id = "u1"
            username = "spyros"
            name = "Spyros"
            role = "admin"
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://api.bethere.example");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.connect_timeout_seconds, 5);
        assert_eq!(config.session.role, Role::Admin);
        assert_eq!(config.session.to_user().id, "u1");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let file = write_config("[api\nbase_url = ");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let file = write_config(
            r#"
            [api]
            base_url = "ftp://nope"
            "#,
        );
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let file = write_config(
            r#"
            [api]
            timeout_seconds = 0
            "#,
        );
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
