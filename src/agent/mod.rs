//! Uptime-check agent
//!
//! Polls the coordinator for checks, probes each target with an HTTP HEAD
//! request, and reports latency/status results back. The worker runs on a
//! single task; the caller owns shutdown via a cancellation token.

pub mod http;
pub mod types;
pub mod worker;

pub use http::{API_KEY_HEADER, CoordinatorClient, CoordinatorError};
pub use types::{Check, UptimeResult};
pub use worker::Worker;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Empty WSTATUS_TOKEN variable. Set the env variable or use the --token flag.")]
    MissingToken,

    #[error(transparent)]
    Client(#[from] CoordinatorError),
}
