//! Configuration and dependency initialization for the blog search client.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::time::Duration;
use tracing::warn;

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://127.0.0.1:9200";

/// Default index name.
pub const DEFAULT_INDEX_NAME: &str = "blog";

/// Default connection retry interval in seconds.
const DEFAULT_RETRY_INTERVAL_SECS: u64 = 15;

/// Default number of connection retries in retry mode.
const DEFAULT_MAX_RETRIES: u32 = 5;

/// Connection mode for OpenSearch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Fail immediately if connection fails.
    FailFast,
    /// Retry the connection a bounded number of times.
    Retry,
}

impl ConnectionMode {
    /// Parse a connection mode.
    ///
    /// Valid values: "fail-fast" or "retry" (case-insensitive).
    /// Defaults to "fail-fast" if not set or invalid.
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "fail-fast".to_string())
            .to_lowercase()
            .as_str()
        {
            "fail-fast" | "failfast" | "fail_fast" => Self::FailFast,
            "retry" => Self::Retry,
            other => {
                warn!(
                    value = other,
                    "Invalid OPENSEARCH_CONNECTION_MODE, defaulting to 'fail-fast'"
                );
                Self::FailFast
            }
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable console output.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value: "json" (case-insensitive) selects JSON output.
    pub fn parse(value: Option<String>) -> Self {
        match value.map(|v| v.to_lowercase()) {
            Some(v) if v == "json" => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// Read `LOG_FORMAT` from the environment.
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok())
    }
}

/// Client configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub opensearch_url: String,
    pub index_name: String,
    pub connection_mode: ConnectionMode,
    pub retry_interval: Duration,
    pub max_retries: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            connection_mode: ConnectionMode::FailFast,
            retry_interval: Duration::from_secs(DEFAULT_RETRY_INTERVAL_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl AppConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://127.0.0.1:9200)
    /// - `INDEX_NAME`: Index name (default: "blog")
    /// - `OPENSEARCH_CONNECTION_MODE`: "fail-fast" or "retry" (default: fail-fast)
    /// - `OPENSEARCH_RETRY_INTERVAL_SECS`: Retry interval in seconds (default: 15)
    /// - `OPENSEARCH_MAX_RETRIES`: Retry attempts in retry mode (default: 5)
    ///
    /// `LOG_FORMAT` is read separately through [`LogFormat::from_env`], before
    /// tracing is set up.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let retry_interval_secs = parse_or_default(
            "OPENSEARCH_RETRY_INTERVAL_SECS",
            lookup("OPENSEARCH_RETRY_INTERVAL_SECS"),
            DEFAULT_RETRY_INTERVAL_SECS,
        );

        Self {
            opensearch_url: lookup("OPENSEARCH_URL").unwrap_or(defaults.opensearch_url),
            index_name: lookup("INDEX_NAME").unwrap_or(defaults.index_name),
            connection_mode: ConnectionMode::parse(lookup("OPENSEARCH_CONNECTION_MODE")),
            retry_interval: Duration::from_secs(retry_interval_secs),
            max_retries: parse_or_default(
                "OPENSEARCH_MAX_RETRIES",
                lookup("OPENSEARCH_MAX_RETRIES"),
                DEFAULT_MAX_RETRIES,
            ),
        }
    }
}

fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = key, value = %raw, "Invalid number, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.opensearch_url, "http://127.0.0.1:9200");
        assert_eq!(config.index_name, "blog");
        assert_eq!(config.connection_mode, ConnectionMode::FailFast);
        assert_eq!(config.retry_interval, Duration::from_secs(15));
        assert_eq!(config.max_retries, 5);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENSEARCH_URL", "http://search:9200"),
            ("INDEX_NAME", "articles"),
            ("OPENSEARCH_CONNECTION_MODE", "Retry"),
            ("OPENSEARCH_RETRY_INTERVAL_SECS", "2"),
            ("OPENSEARCH_MAX_RETRIES", "9"),
        ]));

        assert_eq!(config.opensearch_url, "http://search:9200");
        assert_eq!(config.index_name, "articles");
        assert_eq!(config.connection_mode, ConnectionMode::Retry);
        assert_eq!(config.retry_interval, Duration::from_secs(2));
        assert_eq!(config.max_retries, 9);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENSEARCH_RETRY_INTERVAL_SECS", "soon"),
            ("OPENSEARCH_MAX_RETRIES", "-3"),
        ]));

        assert_eq!(config.retry_interval, Duration::from_secs(15));
        assert_eq!(config.max_retries, 5);
    }

    #[test]
    fn test_connection_mode_parsing() {
        assert_eq!(ConnectionMode::parse(None), ConnectionMode::FailFast);
        assert_eq!(
            ConnectionMode::parse(Some("fail_fast".to_string())),
            ConnectionMode::FailFast
        );
        assert_eq!(
            ConnectionMode::parse(Some("RETRY".to_string())),
            ConnectionMode::Retry
        );
        assert_eq!(
            ConnectionMode::parse(Some("sometimes".to_string())),
            ConnectionMode::FailFast
        );
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("JSON".to_string())), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("text".to_string())), LogFormat::Pretty);
    }
}
