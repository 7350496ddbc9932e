//! Startup configuration from the environment.

use std::net::SocketAddr;

use blueberry_observability::LogFormat;
use thiserror::Error;

pub const BIND_VAR: &str = "BLUEBERRY_BIND";
pub const LOG_FORMAT_VAR: &str = "BLUEBERRY_LOG_FORMAT";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BLUEBERRY_BIND: invalid socket address {0:?}")]
    InvalidBind(String),

    #[error("BLUEBERRY_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::Json,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source; unset variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind.clone()))?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Settings::from_lookup(lookup(&[])).unwrap(), Settings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (BIND_VAR, "127.0.0.1:3000"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Settings::from_lookup(lookup(&[(BIND_VAR, "localhost")])),
            Err(ConfigError::InvalidBind("localhost".into()))
        );
        assert!(matches!(
            Settings::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }
}
