use shared_types::{ApiConfig, AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents, falling back to defaults when unparseable.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides (`SCHOOL_API_URL`, `SCHOOL_API_TIMEOUT_SECS`,
/// `MAX_UPLOAD_BYTES`) on top of the file config.
pub fn apply_env_overrides(mut config: AppConfig, env: impl Fn(&str) -> Option<String>) -> AppConfig {
    if let Some(url) = env("SCHOOL_API_URL").filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url;
    }
    if let Some(secs) = env("SCHOOL_API_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
        config.api.timeout_secs = secs;
    }
    if let Some(bytes) = env("MAX_UPLOAD_BYTES").and_then(|v| v.parse().ok()) {
        config.api.max_upload_bytes = bytes;
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config.features.max_upload_bytes = config.api.max_upload_bytes;
    config
}

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let file = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(file, |key| std::env::var(key).ok());
        tracing::info!(
            base_url = %config.api.base_url,
            features = ?config.features,
            "Configuration loaded"
        );
        config
    })
}

pub fn api_config() -> &'static ApiConfig {
    &load_config().api
}

pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}
