//! Triage configuration
//!
//! Loaded from `triage.yaml` in the working directory, or from an explicit
//! path passed with `--config`. Every key is optional.

use crate::error::{Error, Result};
use crate::report::DEFAULT_SEPARATOR_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// File name searched for when no path is given
pub const CONFIG_FILE: &str = "triage.yaml";

/// Root configuration (`triage.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TriageConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Default output format (overridden by `--json`)
    #[serde(default)]
    pub format: OutputFormat,

    /// Number of dashes above each diagnosis block
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

fn default_separator_width() -> usize {
    DEFAULT_SEPARATOR_WIDTH
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            separator_width: default_separator_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `triage=debug`
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl TriageConfig {
    /// Parse and validate config YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TriageConfig = serde_norway::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        if config.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        EnvFilter::try_new(&config.logging.level).map_err(|e| {
            Error::Config(format!(
                "Invalid logging.level '{}': {}",
                config.logging.level, e
            ))
        })?;

        Ok(config)
    }

    /// Load a config file from an explicit path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
    }

    /// Load `triage.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let file = dir.join(CONFIG_FILE);
        if !file.exists() {
            return Ok(None);
        }
        Self::load_from_file(&file).map(Some)
    }

    /// Explicit path wins; otherwise look in `dir`; otherwise defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::load_from_dir(dir)?.unwrap_or_default()),
        }
    }
}
