//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Grove's configuration controls where folder data comes from when
//! the binary starts: either a JSON data file, or the deterministic
//! sample generator with its seed and size parameters. CLI flags take
//! precedence over file values.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$GROVE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/grove/config.toml`
//! 3. `~/.config/grove/config.toml`
//!
//! A missing config file is not an error; defaults apply.
//!
//! # Example
//!
//! ```toml
//! data_file = "/var/lib/grove/folders.json"
//!
//! [sample]
//! seed = 7
//! orgs = 3
//! folders_per_org = 40
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Sample-data generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// RNG seed; the same seed always yields the same dataset.
    pub seed: u64,
    /// Number of organizations to generate.
    pub orgs: usize,
    /// Number of folders per organization.
    pub folders_per_org: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 2022,
            orgs: 2,
            folders_per_org: 30,
        }
    }
}

/// Grove configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON folder-list file to load instead of generating sample data.
    pub data_file: Option<PathBuf>,
    /// Sample generator parameters.
    pub sample: SampleConfig,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Returns defaults if no config file exists.
    ///
    /// # Errors
    ///
    /// Fails only on an unreadable or unparseable existing file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the config file location.
    ///
    /// `$GROVE_CONFIG` wins; otherwise the XDG config directory
    /// (which `dirs` resolves to `$XDG_CONFIG_HOME` or `~/.config`).
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GROVE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("grove").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sample.orgs, 2);
        assert_eq!(config.sample.folders_per_org, 30);
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            data_file = "/tmp/folders.json"

            [sample]
            seed = 7
            orgs = 3
            folders_per_org = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/folders.json")));
        assert_eq!(config.sample.seed, 7);
        assert_eq!(config.sample.orgs, 3);
        assert_eq!(config.sample.folders_per_org, 40);
    }

    #[test]
    fn partial_sample_section_fills_defaults() {
        let config: Config = toml::from_str("[sample]\nseed = 1\n").unwrap();
        assert_eq!(config.sample.seed, 1);
        assert_eq!(config.sample.orgs, SampleConfig::default().orgs);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<Config, _> = toml::from_str("not_a_key = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sample]\nseed = 99").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.sample.seed, 99);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = Config::load_from(Path::new("/nonexistent/grove.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
