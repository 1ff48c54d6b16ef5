//! Runtime configuration for the dashboard binary.
//!
//! Values come from environment variables; loading a `.env` file first is left
//! to the caller. Every setting has a default, so an empty environment yields
//! the stock dashboard: remote CSVs served on port 8501.

use crate::page::content::DEFAULT_SIDEBAR_IMAGE;
use crate::types::dataset::{DataSource, Dataset};
use log::info;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DAY_SOURCE_VAR: &str = "DASHBOARD_DAY_SOURCE";
pub const HOUR_SOURCE_VAR: &str = "DASHBOARD_HOUR_SOURCE";
pub const BIND_ADDR_VAR: &str = "DASHBOARD_BIND_ADDR";
pub const SIDEBAR_IMAGE_VAR: &str = "DASHBOARD_SIDEBAR_IMAGE";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8501";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("Invalid {var}: '{value}' is not a socket address")]
    InvalidAddress {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Read an optional variable, rejecting values that are blank.
macro_rules! optional_var {
    ($lookup:expr, $var_name:expr) => {
        match $lookup($var_name) {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty($var_name)),
            Some(v) => Some(v.trim().to_string()),
            None => None,
        }
    };
}

/// Effective dashboard settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub day_source: DataSource,
    pub hour_source: DataSource,
    pub bind_addr: SocketAddr,
    pub sidebar_image: String,
}

/// Load configuration from the process environment.
///
/// Optional:
/// - `DASHBOARD_DAY_SOURCE` – URL or path of the day CSV (default: remote day data)
/// - `DASHBOARD_HOUR_SOURCE` – URL or path of the hour CSV (default: remote hour data)
/// - `DASHBOARD_BIND_ADDR` – listen address (default: `0.0.0.0:8501`)
/// - `DASHBOARD_SIDEBAR_IMAGE` – sidebar logo URL
pub fn load_from_env() -> Result<DashboardConfig, ConfigError> {
    DashboardConfig::from_lookup(|name| env::var(name).ok())
}

impl DashboardConfig {
    /// Builds the configuration from any name-to-value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let day_source = optional_var!(lookup, DAY_SOURCE_VAR)
            .map(|v| DataSource::parse(&v))
            .unwrap_or_else(|| DataSource::default_for(Dataset::Day));
        let hour_source = optional_var!(lookup, HOUR_SOURCE_VAR)
            .map(|v| DataSource::parse(&v))
            .unwrap_or_else(|| DataSource::default_for(Dataset::Hour));

        let raw_addr =
            optional_var!(lookup, BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddress {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
                source,
            })?;

        let sidebar_image = optional_var!(lookup, SIDEBAR_IMAGE_VAR)
            .unwrap_or_else(|| DEFAULT_SIDEBAR_IMAGE.to_string());

        Ok(Self {
            day_source,
            hour_source,
            bind_addr,
            sidebar_image,
        })
    }

    pub fn log_config(&self) {
        info!("Configuration loaded:");
        info!("  {}    : {}", DAY_SOURCE_VAR, self.day_source);
        info!("  {}   : {}", HOUR_SOURCE_VAR, self.hour_source);
        info!("  {}     : {}", BIND_ADDR_VAR, self.bind_addr);
        info!("  {} : {}", SIDEBAR_IMAGE_VAR, self.sidebar_image);
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            day_source: DataSource::default_for(Dataset::Day),
            hour_source: DataSource::default_for(Dataset::Hour),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8501)),
            sidebar_image: DEFAULT_SIDEBAR_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.bind_addr.port(), 8501);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (DAY_SOURCE_VAR, "data/day.csv"),
            (HOUR_SOURCE_VAR, "https://example.com/hour.csv"),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (SIDEBAR_IMAGE_VAR, "/static/logo.png"),
        ]))
        .unwrap();

        assert_eq!(config.day_source, DataSource::Local(PathBuf::from("data/day.csv")));
        assert_eq!(
            config.hour_source,
            DataSource::Remote("https://example.com/hour.csv".to_string())
        );
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.sidebar_image, "/static/logo.png");
    }

    #[test]
    fn test_invalid_address_names_variable() {
        let err = DashboardConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddress { var: BIND_ADDR_VAR, .. }));
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }

    #[test]
    fn test_blank_value_is_rejected() {
        let err = DashboardConfig::from_lookup(lookup(&[(DAY_SOURCE_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty(DAY_SOURCE_VAR)));
    }
}
