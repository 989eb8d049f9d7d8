use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Feature flags controlling optional dashboard areas.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Both areas are on unless switched off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Q&A board pages.
    #[serde(default = "enabled")]
    pub community: bool,
    /// File attachments on profile, complaint, notice and assignment forms.
    #[serde(default = "enabled")]
    pub uploads: bool,
    /// Per-file upload limit the browser enforces. Copied from
    /// `[api] max_upload_bytes` when the server loads its config.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            community: true,
            uploads: true,
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

/// Connection settings for the remote school API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}
