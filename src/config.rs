//! Dashboard configuration from the environment

use std::env;

use crate::plan::DEFAULT_PLAN_HORIZON_DAYS;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const ENV_DATA: &str = "ATHLETE_BOARD_DATA";
pub const ENV_SOURCES: &str = "ATHLETE_BOARD_SOURCES";
pub const ENV_FETCH_TIMEOUT: &str = "ATHLETE_BOARD_FETCH_TIMEOUT_SECS";
pub const ENV_PLAN_DAYS: &str = "ATHLETE_BOARD_PLAN_DAYS";

const DEFAULT_DATA: &str = "./data";
const DEFAULT_SOURCES: [&str; 2] = ["2025.csv", "2026.csv"];
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value for {name}: {value}")]
  Invalid { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
  /// Directory or http(s) URL that relative source names resolve against
  pub data: String,
  /// One entry per CSV export, merged before any processing
  pub sources: Vec<String>,
  pub fetch_timeout_secs: u64,
  pub plan_horizon_days: i64,
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      data: DEFAULT_DATA.to_string(),
      sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
      fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
      plan_horizon_days: DEFAULT_PLAN_HORIZON_DAYS,
    }
  }
}

impl DashboardConfig {
  /// Unset variables fall back to defaults; malformed numbers are errors
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let data = env::var(ENV_DATA)
      .ok()
      .map(|v| v.trim().to_string())
      .filter(|v| !v.is_empty())
      .unwrap_or(defaults.data);

    let sources = match env::var(ENV_SOURCES) {
      Ok(raw) => split_list(&raw),
      Err(_) => defaults.sources,
    };

    let fetch_timeout_secs = match env::var(ENV_FETCH_TIMEOUT) {
      Ok(raw) => parse_var(ENV_FETCH_TIMEOUT, &raw)?,
      Err(_) => defaults.fetch_timeout_secs,
    };

    let plan_horizon_days = match env::var(ENV_PLAN_DAYS) {
      Ok(raw) => parse_var::<i64>(ENV_PLAN_DAYS, &raw)
        .and_then(|days| if days < 0 { Err(invalid(ENV_PLAN_DAYS, &raw)) } else { Ok(days) })?,
      Err(_) => defaults.plan_horizon_days,
    };

    Ok(Self {
      data,
      sources,
      fetch_timeout_secs,
      plan_horizon_days,
    })
  }
}

/// Comma-separated list, blanks dropped
pub fn split_list(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(String::from)
    .collect()
}

fn invalid(name: &str, value: &str) -> ConfigError {
  ConfigError::Invalid {
    name: name.to_string(),
    value: value.to_string(),
  }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
  raw.trim().parse().map_err(|_| invalid(name, raw))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
