use super::models::Config;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid coordinator endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Invalid coordinator endpoint scheme '{scheme}', expected 'http' or 'https'")]
    InvalidEndpointScheme { scheme: String },

    #[error("Poll interval must be positive")]
    ZeroPollInterval,

    #[error("HTTP timeout must be positive: {field}")]
    ZeroTimeout { field: &'static str },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_endpoint(config)?;
    validate_intervals(config)?;
    Ok(())
}

/// Ensure the coordinator endpoint is an absolute http(s) URL
fn validate_endpoint(config: &Config) -> Result<(), ValidationError> {
    let endpoint = &config.coordinator.endpoint;

    let url = Url::parse(endpoint).map_err(|e| ValidationError::InvalidEndpoint {
        endpoint: endpoint.clone(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::InvalidEndpointScheme {
                scheme: other.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_intervals(config: &Config) -> Result<(), ValidationError> {
    if config.coordinator.poll_interval.is_zero() {
        return Err(ValidationError::ZeroPollInterval);
    }
    if config.http.connect_timeout.is_zero() {
        return Err(ValidationError::ZeroTimeout {
            field: "connect_timeout",
        });
    }
    if config.http.read_timeout.is_zero() {
        return Err(ValidationError::ZeroTimeout {
            field: "read_timeout",
        });
    }
    if config.http.request_timeout.is_zero() {
        return Err(ValidationError::ZeroTimeout {
            field: "request_timeout",
        });
    }
    Ok(())
}
