//! Configuration for the demo report.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transform::{Combiner, Predicate, Transform};

/// Seeded reduction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Combiner applied left to right.
    #[serde(default = "default_combiner")]
    pub combiner: Combiner,

    /// Seed returned unchanged for empty input.
    #[serde(default = "default_identity")]
    pub identity: i64,
}

fn default_combiner() -> Combiner {
    Combiner::Multiply
}
fn default_identity() -> i64 {
    1
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            combiner: default_combiner(),
            identity: default_identity(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Transform used by the map step.
    #[serde(default)]
    pub transform: Transform,

    /// Predicate used by the filter step.
    #[serde(default = "default_filter")]
    pub filter: Predicate,

    /// Predicate used by the matching step.
    #[serde(default = "default_matching")]
    pub matching: Predicate,

    /// Elements skipped by the limit/skip step.
    #[serde(default = "default_skip")]
    pub skip: usize,

    /// Elements kept by the limit/skip step.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Reduction settings.
    #[serde(default)]
    pub reduce: ReduceConfig,
}

fn default_version() -> u32 {
    1
}
fn default_filter() -> Predicate {
    Predicate::Even
}
fn default_matching() -> Predicate {
    Predicate::Positive
}
fn default_skip() -> usize {
    2
}
fn default_limit() -> usize {
    3
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            transform: Transform::default(),
            filter: default_filter(),
            matching: default_matching(),
            skip: default_skip(),
            limit: default_limit(),
            reduce: ReduceConfig::default(),
        }
    }
}

impl LabConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigSerialize(e.to_string()))
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Overrides skip/limit when provided.
    #[must_use]
    pub fn with_window(mut self, skip: Option<usize>, limit: Option<usize>) -> Self {
        if let Some(skip) = skip {
            self.skip = skip;
        }
        if let Some(limit) = limit {
            self.limit = limit;
        }
        self
    }
}
