use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "WSTATUS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/wstatus.toml";
const ENV_PREFIX: &str = "WSTATUS";
const ENV_SEPARATOR: &str = "__";

const TOKEN_ENV_VAR: &str = "WSTATUS_TOKEN";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_sources(config_path)
}

/// Load secrets from environment variables into config.
/// The API token is never stored in TOML files, only in the environment.
fn load_secrets(config: &mut Config) {
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        config.coordinator.token = token;
    }
}

/// Load configuration from a specific path and the environment.
/// Secrets are resolved here so explicit `--config` paths pick up
/// `WSTATUS_TOKEN` too.
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    // Load .env file if it exists (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    let mut builder = config::Config::builder();

    // Start with defaults (handled by struct Default implementations)
    // Add TOML file if it exists (optional)
    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // Add environment variable overrides
    // WSTATUS__COORDINATOR__POLL_INTERVAL -> coordinator.poll_interval
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let mut config: Config = config.try_deserialize()?;

    // Load secrets from environment variables
    load_secrets(&mut config);

    Ok(config)
}
