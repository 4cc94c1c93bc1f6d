//! Configuration system for the river-crossing scheduler.
//!
//! Load the puzzle and search settings from JSON, TOML or YAML files.
//!
//! # Examples
//!
//! Load configuration from a JSON string:
//!
//! ```
//! use crossing_config::CrossingConfig;
//! use crossing_core::Budget;
//!
//! let config = CrossingConfig::from_json_str(r#"{
//!     "horse_time_limit": 0,
//!     "horse_num_limit": 2,
//!     "horse_times": [1, 2, 5, 10]
//! }"#).unwrap();
//!
//! assert_eq!(config.budget(), Budget::Unlimited);
//! assert_eq!(config.group_limit(), 2);
//! ```
//!
//! Search settings live in an optional `search` table:
//!
//! ```
//! use crossing_config::{CrossingConfig, TieBreak, Traversal};
//!
//! let config = CrossingConfig::from_toml_str(r#"
//!     horse_time_limit = 20
//!     horse_num_limit = 3
//!     horse_times = [1, 2, 5, 10]
//!
//!     [search]
//!     traversal = "recursive"
//!     tie_break = "lexicographic"
//! "#).unwrap();
//!
//! assert_eq!(config.search.traversal, Traversal::Recursive);
//! assert_eq!(config.search.tie_break, TieBreak::Lexicographic);
//! ```

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crossing_core::{Budget, CrossingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default input file name.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default output file name.
pub const DEFAULT_SOLUTION_PATH: &str = "solution.json";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for CrossingError {
    fn from(err: ConfigError) -> Self {
        CrossingError::Config(err.to_string())
    }
}

/// Puzzle and search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CrossingConfig {
    /// Cap on any single horse's accumulated crossing time; `<= 0` is unlimited.
    #[serde(default)]
    pub horse_time_limit: i64,

    /// Largest group allowed on a forward crossing.
    pub horse_num_limit: i64,

    /// Crossing time of each horse, in input order.
    pub horse_times: Vec<i64>,

    /// Search engine settings.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CrossingConfig {
    /// Creates a configuration with the given speeds, a group limit of 2
    /// and no time limit.
    pub fn new(horse_times: Vec<i64>) -> Self {
        Self {
            horse_time_limit: 0,
            horse_num_limit: 2,
            horse_times,
            search: SearchConfig::default(),
        }
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.toml` is read as TOML, `.yaml` / `.yml` as YAML, anything else
    /// as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_json_file(path),
        }
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks the configuration before any search runs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if fewer than 2 horses may cross
    /// together or any crossing time is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horse_num_limit < 2 {
            return Err(ConfigError::Invalid(format!(
                "At least 2 horses have to be able to go at the same time. Current limit {}",
                self.horse_num_limit
            )));
        }
        if let Some((i, t)) = self
            .horse_times
            .iter()
            .enumerate()
            .find(|(_, t)| **t <= 0)
        {
            return Err(ConfigError::Invalid(format!(
                "horse_times[{}] must be positive, got {}",
                i, t
            )));
        }
        let max_speed = self.horse_times.iter().copied().max().unwrap_or(0) as u64;
        let max_crossings = (self.horse_times.len() as u64).saturating_mul(2);
        if max_crossings.checked_mul(max_speed).is_none() {
            return Err(ConfigError::Invalid(format!(
                "horse_times too large: {} crossings at speed {} overflow the total time",
                max_crossings, max_speed
            )));
        }
        Ok(())
    }

    /// Sets the per-horse time limit.
    pub fn with_time_limit(mut self, limit: i64) -> Self {
        self.horse_time_limit = limit;
        self
    }

    /// Sets the forward group limit.
    pub fn with_num_limit(mut self, limit: i64) -> Self {
        self.horse_num_limit = limit;
        self
    }

    /// Sets the traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.search.traversal = traversal;
        self
    }

    /// Sets the ordering of equal-time solutions.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.search.tie_break = tie_break;
        self
    }

    /// Returns the per-horse budget.
    pub fn budget(&self) -> Budget {
        Budget::from_limit(self.horse_time_limit)
    }

    /// Returns the forward group limit, clamped to zero for invalid values.
    ///
    /// Call [`validate`](Self::validate) first to reject limits below 2.
    pub fn group_limit(&self) -> usize {
        usize::try_from(self.horse_num_limit).unwrap_or(0)
    }

    /// Returns the crossing times as unsigned speeds.
    ///
    /// Non-positive values map to 0; call [`validate`](Self::validate) first.
    pub fn speeds(&self) -> Vec<u64> {
        self.horse_times
            .iter()
            .map(|&t| u64::try_from(t).unwrap_or(0))
            .collect()
    }
}

/// Search engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// How the search tree is walked.
    #[serde(default)]
    pub traversal: Traversal,

    /// How solutions with equal total time are ordered.
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Search tree traversal strategy.
///
/// Both strategies visit nodes in the same depth-first order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Depth-first with an explicit stack; immune to call-stack limits.
    #[default]
    Iterative,

    /// Depth-first by recursion.
    Recursive,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::Iterative => write!(f, "Iterative"),
            Traversal::Recursive => write!(f, "Recursive"),
        }
    }
}

/// Ordering of solutions that share a total time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order in which solutions were discovered.
    #[default]
    Discovery,

    /// Compare paths crossing by crossing, by horse label.
    Lexicographic,
}
