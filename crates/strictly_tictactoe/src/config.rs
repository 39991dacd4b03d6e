//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rules that can be tuned without touching the engine.
///
/// Loaded from TOML:
///
/// ```toml
/// name_min_len = 3
/// name_max_len = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shortest accepted player name, in characters.
    #[serde(default = "default_name_min_len")]
    name_min_len: usize,

    /// Longest accepted player name, in characters.
    #[serde(default = "default_name_max_len")]
    name_max_len: usize,
}

fn default_name_min_len() -> usize {
    3
}

fn default_name_max_len() -> usize {
    20
}

impl GameConfig {
    /// Creates a configuration with the given name length bounds.
    #[instrument]
    pub fn new(name_min_len: usize, name_max_len: usize) -> Result<Self, ConfigError> {
        let config = Self {
            name_min_len,
            name_max_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            name_min_len = config.name_min_len,
            name_max_len = config.name_max_len,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the bounds describe a non-empty range of positive lengths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name_min_len == 0 {
            return Err(ConfigError::new("name_min_len must be at least 1".to_string()));
        }
        if self.name_min_len > self.name_max_len {
            return Err(ConfigError::new(format!(
                "name_min_len ({}) exceeds name_max_len ({})",
                self.name_min_len, self.name_max_len
            )));
        }
        Ok(())
    }

    /// Whether `name` has an accepted length, counted in characters.
    pub fn accepts_name(&self, name: &str) -> bool {
        (self.name_min_len..=self.name_max_len).contains(&name.chars().count())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name_min_len: default_name_min_len(),
            name_max_len: default_name_max_len(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_bounds() {
        let config = GameConfig::default();
        assert_eq!(*config.name_min_len(), 3);
        assert_eq!(*config.name_max_len(), 20);
    }

    #[test]
    fn test_accepts_name_boundaries() {
        let config = GameConfig::default();
        assert!(!config.accepts_name("Al"));
        assert!(config.accepts_name("Bob"));
        assert!(config.accepts_name(&"a".repeat(20)));
        assert!(!config.accepts_name(&"a".repeat(21)));
    }

    #[test]
    fn test_accepts_name_counts_characters() {
        let config = GameConfig::default();
        // Three characters, six bytes.
        assert!(config.accepts_name("Zoë"));
        assert!(!config.accepts_name("Éa"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("name_max_len = 8").expect("valid toml");
        assert_eq!(*config.name_min_len(), 3);
        assert_eq!(*config.name_max_len(), 8);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = GameConfig::new(10, 4).unwrap_err();
        assert!(err.message.contains("exceeds"));
        assert!(GameConfig::new(0, 4).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "name_min_len = 2\nname_max_len = 12").expect("write");

        let config = GameConfig::from_file(file.path()).expect("config loads");
        assert_eq!(config, GameConfig::new(2, 12).expect("valid bounds"));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
