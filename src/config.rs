//! Configuration loaded from `gamess-summary.toml`.
//!
//! Every field has a default, so a missing or empty config file still yields
//! a runnable tool. CLI flags override file values in `main`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Directory scanned for log files.
    pub input_dir: PathBuf,
    /// Glob pattern applied within `input_dir`.
    pub pattern: String,
    /// Destination CSV file.
    pub output: PathBuf,
    /// File names (case-insensitive) excluded before any parsing.
    pub skip_files: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pattern: "*.log".to_string(),
            output: PathBuf::from("gamess_summary.csv"),
            skip_files: vec!["readme.txt".to_string()],
        }
    }
}

impl SummaryConfig {
    /// Load from a TOML file. A missing file is not an error (defaults
    /// apply), but unparsable TOML is.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        toml::from_str(&contents).map_err(ConfigError::Parse)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}
