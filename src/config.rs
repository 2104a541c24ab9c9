//! # Configuration Module
//!
//! Runtime settings for the command-line front end, read from environment
//! variables (a `.env` file is honoured by `main`). Command-line flags take
//! precedence over anything set here.

use std::env;
use std::str::FromStr;

use crate::ingredient_model::Scaling;

// Environment variable names
pub const DATA_PATH_VAR: &str = "MEALPLAN_DATA_PATH";
pub const LOG_FORMAT_VAR: &str = "MEALPLAN_LOG_FORMAT";
pub const DEFAULT_MULTIPLIER_VAR: &str = "MEALPLAN_DEFAULT_MULTIPLIER";

// Defaults
pub const DEFAULT_DATA_PATH: &str = "fixtures/sample_store.json";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON fixture holding meals and plans
    pub data_path: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Request-level multiplier; `None` scales by each day's portion size
    pub default_multiplier: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            log_format: LogFormat::Text,
            default_multiplier: None,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_path = lookup(DATA_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or(defaults.data_path);

        let log_format = lookup(LOG_FORMAT_VAR)
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.log_format);

        let default_multiplier = lookup(DEFAULT_MULTIPLIER_VAR)
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|multiplier| *multiplier > 0);

        Self {
            data_path,
            log_format,
            default_multiplier,
        }
    }

    /// Scaling to use when a request gives no multiplier of its own
    pub fn scaling(&self, requested: Option<u32>) -> Scaling {
        match requested.or(self.default_multiplier) {
            Some(multiplier) => Scaling::Uniform(multiplier),
            None => Scaling::PortionSizes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scaling(None), Scaling::PortionSizes);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            (DATA_PATH_VAR, "/tmp/plans.json"),
            (LOG_FORMAT_VAR, "JSON"),
            (DEFAULT_MULTIPLIER_VAR, "3"),
        ]);

        assert_eq!(config.data_path, "/tmp/plans.json");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.scaling(None), Scaling::Uniform(3));
        assert_eq!(config.scaling(Some(5)), Scaling::Uniform(5));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            (LOG_FORMAT_VAR, "xml"),
            (DEFAULT_MULTIPLIER_VAR, "zero"),
        ]);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.default_multiplier, None);

        let config = config_from(&[(DEFAULT_MULTIPLIER_VAR, "0")]);
        assert_eq!(config.default_multiplier, None);
    }
}
