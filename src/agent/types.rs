//! Wire types exchanged with the coordinator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A unit of uptime-check work assigned by the coordinator.
///
/// All fields are optional on the wire; a payload without an endpoint
/// (including an empty `{}` body) means "no work this cycle".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Check {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,
}

impl Check {
    /// Whether this payload actually carries work to probe
    pub fn has_work(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

/// Outcome of a single probe, reported back to the coordinator.
///
/// Exactly one of (`latency` + `status_code`) or `err` is populated;
/// zero/empty fields are omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UptimeResult {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Wall-clock latency in nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<u64>,
    #[serde(
        rename = "statusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl UptimeResult {
    /// Result for a probe that got a response
    pub fn up(id: &str, latency: Duration, status_code: u16) -> Self {
        Self {
            id: id.to_string(),
            latency: Some(u64::try_from(latency.as_nanos()).unwrap_or(u64::MAX)),
            status_code: Some(status_code),
            err: String::new(),
        }
    }

    /// Result for a probe that failed at the transport level
    pub fn down(id: &str, err: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            latency: None,
            status_code: None,
            err: err.into(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.err.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_decodes_full_payload() {
        let check: Check = serde_json::from_str(
            r#"{"id":"1","endpoint":"http://example.com","protocol":"http"}"#,
        )
        .unwrap();

        assert_eq!(check.id, "1");
        assert_eq!(check.endpoint, "http://example.com");
        assert_eq!(check.protocol, "http");
        assert!(check.has_work());
    }

    #[test]
    fn test_check_empty_body_means_no_work() {
        let check: Check = serde_json::from_str("{}").unwrap();
        assert!(!check.has_work());
    }

    #[test]
    fn test_check_missing_endpoint_means_no_work() {
        let check: Check = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert!(!check.has_work());
    }

    #[test]
    fn test_up_result_wire_shape() {
        let result = UptimeResult::up("1", Duration::from_millis(50), 200);

        assert!(result.is_up());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"id": "1", "latency": 50_000_000u64, "statusCode": 200})
        );
    }

    #[test]
    fn test_down_result_wire_shape() {
        let result = UptimeResult::down("2", "dns error: no such host");

        assert!(!result.is_up());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"id": "2", "err": "dns error: no such host"})
        );
    }

    #[test]
    fn test_latency_is_nanoseconds() {
        let result = UptimeResult::up("3", Duration::from_secs(1), 204);
        assert_eq!(result.latency, Some(1_000_000_000));
    }

    #[test]
    fn test_latency_saturates_instead_of_truncating() {
        // u64 nanoseconds top out around 584 years; anything beyond
        // pins to the maximum rather than wrapping
        let result = UptimeResult::up("4", Duration::MAX, 200);
        assert_eq!(result.latency, Some(u64::MAX));
    }
}
