//! Configuration for the `todo` binary
//!
//! Read from environment variables, with defaults for every setting:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `TODO_SEED` | `true` | Dispatch the demo items at start |
//! | `TODO_FILTER` | `all` | Filter selected after seeding |
//! | `TODO_PRINT_METRICS` | `false` | Print Prometheus metrics on exit |
//! | `TODO_LOG` | `todo=info,flowstate_runtime=info` | Log filter used when `RUST_LOG` is unset |
//!
//! # Example
//!
//! ```
//! use todo::config::TodoConfig;
//! use todo::types::VisibilityFilter;
//!
//! let config = TodoConfig::from_lookup(|key| match key {
//!     "TODO_FILTER" => Some("active".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert!(config.seed);
//! assert_eq!(config.filter, VisibilityFilter::Active);
//! ```

use crate::types::{ParseFilterError, VisibilityFilter};
use thiserror::Error;

/// Seed variable name
pub const SEED_VAR: &str = "TODO_SEED";
/// Initial filter variable name
pub const FILTER_VAR: &str = "TODO_FILTER";
/// Metrics output variable name
pub const PRINT_METRICS_VAR: &str = "TODO_PRINT_METRICS";
/// Log filter variable name
pub const LOG_VAR: &str = "TODO_LOG";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "todo=info,flowstate_runtime=info";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean variable held something other than a boolean
    #[error("Invalid boolean for {var}: \"{value}\"")]
    InvalidBool {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// The filter variable did not name a filter
    #[error("Invalid value for {var}: {source}")]
    InvalidFilter {
        /// Variable name
        var: &'static str,
        /// Parse failure
        #[source]
        source: ParseFilterError,
    },

    /// The log filter was empty
    #[error("{0} cannot be empty")]
    EmptyLogFilter(&'static str),
}

/// Settings of the `todo` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Dispatch the demo items at start
    pub seed: bool,
    /// Filter selected after seeding
    pub filter: VisibilityFilter,
    /// Print Prometheus metrics on exit
    pub print_metrics: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            seed: true,
            filter: VisibilityFilter::All,
            print_metrics: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TodoConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// Unset keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a key is set to an invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_bool(SEED_VAR, &value)?;
        }

        if let Some(value) = lookup(FILTER_VAR) {
            config.filter = value
                .parse()
                .map_err(|source| ConfigError::InvalidFilter { var: FILTER_VAR, source })?;
        }

        if let Some(value) = lookup(PRINT_METRICS_VAR) {
            config.print_metrics = parse_bool(PRINT_METRICS_VAR, &value)?;
        }

        if let Some(value) = lookup(LOG_VAR) {
            config.log_filter = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if the log filter is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter(LOG_VAR));
        }
        Ok(())
    }

    /// Set whether the demo items are dispatched at start
    #[must_use]
    pub const fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Set the filter selected after seeding
    #[must_use]
    pub const fn with_filter(mut self, filter: VisibilityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set whether metrics are printed on exit
    #[must_use]
    pub const fn with_print_metrics(mut self, print_metrics: bool) -> Self {
        self.print_metrics = print_metrics;
        self
    }

    /// Set the fallback log filter
    #[must_use]
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
