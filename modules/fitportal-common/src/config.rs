use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::PortalError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Data files
    pub masters_path: Option<PathBuf>,
    pub news_path: Option<PathBuf>,

    /// How long an app-area page waits for its content before showing the
    /// loading view instead.
    pub news_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, PortalError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PortalError> {
        let web_port = parse_or(&lookup, "WEB_PORT", 3000u16)?;
        let timeout_ms = parse_or(&lookup, "NEWS_TIMEOUT_MS", 1500u64)?;

        Ok(Self {
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            masters_path: lookup("MASTERS_PATH").map(PathBuf::from),
            news_path: lookup("NEWS_PATH").map(PathBuf::from),
            news_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, PortalError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PortalError::Config(format!("{key} must be a number, got {raw:?}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, PortalError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.web_host, "0.0.0.0");
        assert_eq!(config.web_port, 3000);
        assert!(config.masters_path.is_none());
        assert!(config.news_path.is_none());
        assert_eq!(config.news_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("WEB_HOST", "127.0.0.1"),
            ("WEB_PORT", "8080"),
            ("MASTERS_PATH", "/etc/fitportal/masters.json"),
            ("NEWS_TIMEOUT_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.web_host, "127.0.0.1");
        assert_eq!(config.web_port, 8080);
        assert_eq!(
            config.masters_path,
            Some(PathBuf::from("/etc/fitportal/masters.json"))
        );
        assert_eq!(config.news_timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = config_from(&[("WEB_PORT", "http")]).unwrap_err();
        assert!(matches!(err, PortalError::Config(msg) if msg.contains("WEB_PORT")));
    }
}
