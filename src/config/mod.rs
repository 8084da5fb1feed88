//! Configuration management.
//!
//! Endpoint URL, API key, and timing constants live in an explicit [`Config`]
//! struct passed to the pipeline rather than in module-level globals. Values
//! come from a TOML file when one is present, with the API key overridable
//! via the `SEMANTIC_SCHOLAR_API_KEY` environment variable and the timing
//! knobs overridable from the command line.
//!
//! # Configuration File Format
//!
//! ```toml
//! api_base = "https://api.semanticscholar.org/graph/v1"
//! api_key = "your-api-key"
//! delay_secs = 10
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Semantic Scholar Graph API base URL
const DEFAULT_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the metadata API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Semantic Scholar API key (optional, for higher rate limits)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Seconds to wait after every API request
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            delay_secs: default_delay_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_delay_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn apply_env(mut self) -> Self {
        if let Ok(key) = std::env::var("SEMANTIC_SCHOLAR_API_KEY") {
            self.api_key = Some(key);
        }
        self
    }
}

/// Look for a configuration file in the default locations: `doi-harvest.toml`
/// in the current directory, then `doi-harvest/config.toml` in the user
/// config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("doi-harvest.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("doi-harvest").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.delay_secs, 10);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(
            &path,
            r#"
api_base = "http://localhost:8080/graph/v1"
api_key = "test-key"
delay_secs = 2
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080/graph/v1");
        assert_eq!(config.api_key, Some("test-key".to_string()));
        assert_eq!(config.delay_secs, 2);
        // Unset fields fall back to defaults
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_file_nonexistent() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        std::fs::write(&path, "invalid = toml = content").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
