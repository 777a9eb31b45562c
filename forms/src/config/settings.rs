// Backend connection settings, loaded from a JSON file or taken from defaults.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormsError, Result};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub locale: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: "http://localhost:3333".to_string(),
            request_timeout_secs: 30,
            locale: "pt-BR".to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads a JSON config file. Keys that are absent keep their default value.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&raw)?;
        config.check()?;
        tracing::info!(path = %path.display(), base_url = %config.api_base_url, "Loaded client configuration");
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(FormsError::ConfigError(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(FormsError::ConfigError("request_timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Full URL for a REST path, with exactly one `/` between base and path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
