//! HTTP client for talking to the coordinator and probing targets

use super::types::{Check, UptimeResult};
use crate::config::{CoordinatorConfig, HttpConfig};
use reqwest::{Client, StatusCode};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Header carrying the agent's API key on every coordinator call
pub const API_KEY_HEADER: &str = "X-WStatus-Key";

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Cannot reach the api at {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status from the api at {endpoint}: {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Malformed work payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;

/// Client for the coordinator API plus probe execution.
///
/// Connections are not kept alive between requests and redirects are never
/// followed; a redirect response is treated as the final response.
pub struct CoordinatorClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl CoordinatorClient {
    /// Build a client with the configured timeouts
    pub fn new(coordinator: &CoordinatorConfig, http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(http.connect_timeout.as_duration())
            .read_timeout(http.read_timeout.as_duration())
            .timeout(http.request_timeout.as_duration())
            .redirect(reqwest::redirect::Policy::none())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(CoordinatorError::Build)?;

        Ok(Self {
            client,
            endpoint: coordinator.endpoint.clone(),
            token: coordinator.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Confirm the coordinator is reachable and the token is accepted
    pub async fn validate(&self) -> Result<()> {
        let url = format!("{}validate", self.endpoint);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| CoordinatorError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CoordinatorError::Status {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        Ok(())
    }

    /// Fetch the next check to run; doubles as the agent's heartbeat.
    ///
    /// A decodable body with no endpoint is a valid "no work" answer and is
    /// surfaced as a `Check` for which `has_work()` is false.
    pub async fn fetch_work(&self) -> Result<Check> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(API_KEY_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| CoordinatorError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CoordinatorError::Status {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoordinatorError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let check: Check = serde_json::from_str(&body)?;
        debug!(check_id = %check.id, endpoint = %check.endpoint, "Fetched work");

        Ok(check)
    }

    /// Probe the check's target with an HTTP HEAD request.
    ///
    /// Latency is measured from just before the request to response headers
    /// being received. Transport failures become part of the result payload;
    /// this never returns an error.
    pub async fn probe(&self, check: &Check) -> UptimeResult {
        let start = Instant::now();

        match self.client.head(&check.endpoint).send().await {
            Ok(response) => {
                let elapsed = start.elapsed();
                UptimeResult::up(&check.id, elapsed, response.status().as_u16())
            }
            Err(e) => UptimeResult::down(&check.id, e.to_string()),
        }
    }

    /// Submit a probe result to the coordinator
    pub async fn submit(&self, result: &UptimeResult) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.token)
            .json(result)
            .send()
            .await
            .map_err(|e| CoordinatorError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CoordinatorError::Status {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_client_builds_with_defaults() {
        let config = Config::default();
        let client = CoordinatorClient::new(&config.coordinator, &config.http).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8008/api/");
    }

    #[tokio::test]
    async fn test_probe_failure_captures_error_text() {
        let config = Config::default();
        let client = CoordinatorClient::new(&config.coordinator, &config.http).unwrap();

        let check = Check {
            id: "2".to_string(),
            endpoint: "http://bad.invalid".to_string(),
            protocol: "http".to_string(),
        };

        let result = client.probe(&check).await;
        assert!(!result.is_up());
        assert_eq!(result.id, "2");
        assert!(result.latency.is_none());
        assert!(result.status_code.is_none());
        assert!(!result.err.is_empty());
    }
}
