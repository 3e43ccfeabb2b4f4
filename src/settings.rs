use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{DEFAULT_FEED_URL, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub port: u16,
    pub feed_url: String,
    pub auto_open_browser: bool,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            feed_url: DEFAULT_FEED_URL.to_string(),
            auto_open_browser: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Reads `key = value` lines. Unknown keys and unparsable values are
    /// ignored and leave the default in place.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        if let Some(port) = config_map.get("port").and_then(|v| v.parse::<u16>().ok()) {
            settings.port = port;
        }
        if let Some(feed_url) = config_map.get("feed_url") {
            let feed_url = feed_url.trim_matches('"');
            if !feed_url.is_empty() {
                settings.feed_url = feed_url.to_string();
            }
        }
        if let Some(auto_open) = config_map
            .get("auto_open_browser")
            .and_then(|v| v.parse::<bool>().ok())
        {
            settings.auto_open_browser = auto_open;
        }
        if let Some(timeout) = config_map
            .get("request_timeout_secs")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|t| *t > 0)
        {
            settings.request_timeout_secs = timeout;
        }

        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `quakemap.ini` next to the executable, or the crate root under `cargo run`.
    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("quakemap.ini");
        path
    }
}
