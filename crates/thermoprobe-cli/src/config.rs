//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Sampling session parameters.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Sampling session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Total monitoring duration in minutes.
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u64,

    /// Pause between consecutive samples in seconds.
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration_minutes(),
            interval_seconds: default_interval_seconds(),
        }
    }
}

// Default value functions
fn default_duration_minutes() -> u64 {
    10
}

fn default_interval_seconds() -> u64 {
    20
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.duration_minutes, 10);
        assert_eq!(config.session.interval_seconds, 20);
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.session.duration_minutes, 10);
        assert_eq!(config.session.interval_seconds, 20);
    }

    #[test]
    fn test_parse_partial_section() {
        let config: Config = toml::from_str("[session]\ninterval_seconds = 5\n").unwrap();
        assert_eq!(config.session.duration_minutes, 10);
        assert_eq!(config.session.interval_seconds, 5);
    }
}
