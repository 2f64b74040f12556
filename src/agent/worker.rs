//! Worker control loop: connect with retry, then fetch/probe/report cycles

use super::AgentError;
use super::http::CoordinatorClient;
use crate::config::Config;
use crate::humanize::Interval;
use crate::observability::Metrics;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// The uptime-check worker.
///
/// Owns the coordinator client and runs the whole lifecycle on a single
/// task: validate connectivity (retrying forever at a fixed interval), then
/// poll for work, probe, and report until the shutdown token is cancelled.
/// No two probes ever run concurrently.
pub struct Worker {
    client: CoordinatorClient,
    poll_interval: Duration,
    metrics: Arc<Metrics>,
}

impl Worker {
    /// Create a worker from resolved configuration.
    ///
    /// Fails fast on an empty token; no network call is ever attempted
    /// without one.
    pub fn new(config: &Config) -> Result<Self, AgentError> {
        if config.coordinator.token.is_empty() {
            return Err(AgentError::MissingToken);
        }

        let client = CoordinatorClient::new(&config.coordinator, &config.http)?;

        Ok(Self {
            client,
            poll_interval: config.coordinator.poll_interval.as_duration(),
            metrics: Arc::new(Metrics::new()),
        })
    }

    /// Handle to the worker's counters, valid after the worker is consumed
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    /// Run the worker until the shutdown token is cancelled.
    ///
    /// Cancellation is observed between cycles and during sleeps, never in
    /// the middle of a probe. Dropping the worker on return closes the
    /// HTTP client and any idle connections.
    pub async fn run(self, shutdown: CancellationToken) {
        if !self.connect(&shutdown).await {
            info!("Shutdown requested before the coordinator became reachable");
            return;
        }

        loop {
            self.poll_cycle().await;

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping the agent");
                    break;
                }
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        info!("Agent stopped");
    }

    /// Block until the validate endpoint answers 200, retrying forever at
    /// the poll interval. Returns false if shutdown was requested first.
    async fn connect(&self, shutdown: &CancellationToken) -> bool {
        loop {
            info!("Connecting to central scheduler...");

            match self.client.validate().await {
                Ok(()) => {
                    info!("Connected.");
                    return true;
                }
                Err(e) => {
                    error!(error = %e, "Connectivity check failed");
                    info!("will try again in {}", Interval(self.poll_interval));
                }
            }

            tokio::select! {
                _ = shutdown.cancelled() => return false,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }

    /// One fetch/probe/report cycle. Every failure is terminal to the
    /// cycle only; the loop always reaches the next sleep.
    async fn poll_cycle(&self) {
        self.metrics.cycle();

        let check = match self.client.fetch_work().await {
            Ok(check) => check,
            Err(e) => {
                error!(endpoint = %self.client.endpoint(), error = %e, "Fetching work failed");
                self.metrics.fetch_failed();
                return;
            }
        };

        if !check.has_work() {
            return;
        }

        let result = self.client.probe(&check).await;
        info!(
            check_id = %result.id,
            up = result.is_up(),
            "Check done: {:?}",
            result
        );

        if result.is_up() {
            self.metrics.probe_up();
        } else {
            self.metrics.probe_down();
        }

        if let Err(e) = self.client.submit(&result).await {
            error!(endpoint = %self.client.endpoint(), error = %e, "Error sending results to the endpoint");
            self.metrics.report_failed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_fatal() {
        let config = Config::default();
        assert!(config.coordinator.token.is_empty());

        let result = Worker::new(&config);
        assert!(matches!(result, Err(AgentError::MissingToken)));
    }

    #[test]
    fn test_non_empty_token_constructs() {
        let mut config = Config::default();
        config.coordinator.token = "abc123".to_string();

        let worker = Worker::new(&config).unwrap();
        assert_eq!(worker.metrics().snapshot().cycles, 0);
    }
}
