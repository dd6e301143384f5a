/*
[INPUT]:  YAML configuration file and HEVA_* environment variables
[OUTPUT]: Parsed client configuration
[POS]:    Configuration layer - backend location, storage and fallback policy
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::{HevaError, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

pub const ENV_BASE_URL: &str = "HEVA_API_BASE_URL";
pub const ENV_OFFLINE_DEMO: &str = "HEVA_OFFLINE_DEMO";
pub const ENV_STORAGE_PATH: &str = "HEVA_STORAGE_PATH";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Backend origin including the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Substitute a demo session when login cannot reach the backend
    #[serde(default)]
    pub allow_offline_demo_session: bool,
    /// Whole-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Token store file. Defaults to `./.heva/session.json`.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            allow_offline_demo_session: false,
            timeout_secs: None,
            connect_timeout_secs: None,
            storage_path: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HevaError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| HevaError::Config(format!("invalid configuration: {e}")))
    }

    /// Apply `HEVA_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(flag) = lookup(ENV_OFFLINE_DEMO) {
            self.allow_offline_demo_session = parse_flag(&flag).ok_or_else(|| {
                HevaError::Config(format!("{ENV_OFFLINE_DEMO} must be a boolean, got {flag:?}"))
            })?;
        }
        if let Some(path) = lookup(ENV_STORAGE_PATH) {
            self.storage_path = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(default_storage_path)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_storage_path() -> PathBuf {
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    base_dir.join(".heva").join("session.json")
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
