use crate::humanize::Interval;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub coordinator: CoordinatorConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Coordinator connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoordinatorConfig {
    /// Base API endpoint, trailing slash included
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Delay between consecutive work-fetch cycles
    #[serde(default = "default_poll_interval")]
    pub poll_interval: Interval,
    /// Agent API key (loaded from environment, not from config file)
    #[serde(skip)]
    pub token: String,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval: default_poll_interval(),
            token: String::new(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8008/api/".to_string()
}

fn default_poll_interval() -> Interval {
    Interval::from_secs(30)
}

/// HTTP client timeouts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Interval,
    /// Bound on waiting for response headers / body reads
    #[serde(default = "default_read_timeout")]
    pub read_timeout: Interval,
    /// Bound on the whole request, connect included
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Interval,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            read_timeout: default_read_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_connect_timeout() -> Interval {
    Interval::from_secs(10)
}

fn default_read_timeout() -> Interval {
    Interval::from_secs(5)
}

fn default_request_timeout() -> Interval {
    Interval::from_secs(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.coordinator.endpoint, "http://localhost:8008/api/");
        assert_eq!(
            config.coordinator.poll_interval.as_duration(),
            Duration::from_secs(30)
        );
        assert!(config.coordinator.token.is_empty());
        assert_eq!(config.http.connect_timeout.as_duration(), Duration::from_secs(10));
        assert_eq!(config.http.request_timeout.as_duration(), Duration::from_secs(10));
    }

    #[test]
    fn test_token_never_deserialized_from_file() {
        let config: Config =
            toml::from_str("[coordinator]\nendpoint = \"https://wstatus.example/api/\"\n").unwrap();
        assert!(config.coordinator.token.is_empty());
        assert_eq!(config.coordinator.endpoint, "https://wstatus.example/api/");
    }
}
