//! Environment-dependent configuration tests.
//!
//! These live in their own test binary: they mutate the process
//! environment, which must not race with other tests. Everything
//! env-related is driven from the single test below.

use std::env;
use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use wstatus_agent::config::Config;

#[test]
fn explicit_config_path_still_resolves_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wstatus.toml");

    let toml_content = r#"
[coordinator]
endpoint = "https://status.example.com/api/"
poll_interval = "10s"
    "#;
    fs::write(&config_path, toml_content).unwrap();

    // Safety: this test binary holds exactly one env-mutating test, so
    // nothing reads the environment concurrently.
    unsafe {
        env::set_var("WSTATUS_TOKEN", "abc123");
        env::set_var("WSTATUS__HTTP__REQUEST_TIMEOUT", "15s");
    }

    let config = Config::load_from_path(config_path).unwrap();

    // The token comes from WSTATUS_TOKEN even when the file path is
    // given explicitly (as with --config)
    assert_eq!(config.coordinator.token, "abc123");

    // WSTATUS__* overrides layer on top of the file
    assert_eq!(
        config.http.request_timeout.as_duration(),
        Duration::from_secs(15)
    );

    // File values and defaults are otherwise untouched
    assert_eq!(config.coordinator.endpoint, "https://status.example.com/api/");
    assert_eq!(
        config.coordinator.poll_interval.as_duration(),
        Duration::from_secs(10)
    );

    unsafe {
        env::remove_var("WSTATUS_TOKEN");
        env::remove_var("WSTATUS__HTTP__REQUEST_TIMEOUT");
    }
}
