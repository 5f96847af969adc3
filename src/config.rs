//! Host configuration
//!
//! Optional TOML file read by the terminal binary. Every key may be left out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpreter::{HostEnvironment, DEFAULT_HISTORY_LIMIT};
use crate::terminal::TerminalOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Prompt label.
    pub user: String,
    pub history_limit: usize,
    /// JSON file holding already-fetched location metadata.
    pub location_file: Option<PathBuf>,
    /// Reported by `status`; falls back to `$LANG`.
    pub language: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            user: "jm0ran".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            location_file: None,
            language: None,
        }
    }
}

impl HostConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Session options for a terminal host described by `environment`.
    pub fn terminal_options(&self, mut environment: HostEnvironment) -> TerminalOptions {
        if let Some(language) = &self.language {
            environment.language = language.clone();
        }
        TerminalOptions {
            user: self.user.clone(),
            history_limit: self.history_limit,
            environment,
            started_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(HostConfig::from_toml_str("").unwrap(), HostConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = HostConfig::from_toml_str(
            r#"
            user = "guest"
            location_file = "/tmp/location.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.user, "guest");
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.location_file, Some(PathBuf::from("/tmp/location.json")));
        assert!(config.language.is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = HostConfig::from_toml_str("history_limit = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("portfolio-shell-no-such-config.toml");
        let err = HostConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("portfolio-shell-no-such-config.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("portfolio-shell-{}.toml", std::process::id()));
        std::fs::write(&path, "history_limit = 5\nlanguage = \"fr-FR\"\n").unwrap();
        let config = HostConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.history_limit, 5);
        let options = config.terminal_options(HostEnvironment::default());
        assert_eq!(options.environment.language, "fr-FR");
        assert_eq!(options.user, "jm0ran");
        assert_eq!(options.history_limit, 5);
    }
}
