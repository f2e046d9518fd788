//! Client configuration, read from an optional RON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use blogfront_engine::FetchSettings;
use front_logging::{front_info, LogDestination};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub debounce_ms: u64,
    pub near_bottom_px: f64,
    pub viewport_height: f64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
    pub log: LogDestination,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            debounce_ms: 200,
            near_bottom_px: blogfront_core::NEAR_BOTTOM_THRESHOLD_PX,
            viewport_height: 900.0,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
            log: LogDestination::Terminal,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = ron::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        front_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Upper bound for one request round-trip, used when waiting on the engine.
    pub fn response_wait(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs + self.request_timeout_secs)
            + self.debounce()
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_body_bytes,
            ..FetchSettings::default()
        }
    }
}
