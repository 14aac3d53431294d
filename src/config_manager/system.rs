use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(rename = "conf_version")]
    #[serde(default = "default_conf_version")]
    pub conf_version: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory synthesized audio is written to and served from
    #[serde(rename = "audio_output_dir")]
    #[serde(default = "default_audio_output_dir")]
    pub audio_output_dir: String,

    #[serde(rename = "audio_file_name")]
    #[serde(default = "default_audio_file_name")]
    pub audio_file_name: String,

    /// Prefix prepended to the file name to build `speech_url`
    #[serde(rename = "audio_url_prefix")]
    #[serde(default = "default_audio_url_prefix")]
    pub audio_url_prefix: String,

    /// Write one `{uuid}.mp3` per request instead of overwriting `audio_file_name`
    #[serde(rename = "unique_audio_files")]
    #[serde(default)]
    pub unique_audio_files: bool,

    #[serde(rename = "python_service_url")]
    #[serde(default)]
    pub python_service_url: Option<String>,

    /// Per-request timeout for provider HTTP calls. Unset means no timeout.
    #[serde(rename = "request_timeout_ms")]
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_conf_version() -> String {
    "v1.0.0".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12393
}

fn default_audio_output_dir() -> String {
    "cache".to_string()
}

fn default_audio_file_name() -> String {
    "output.mp3".to_string()
}

fn default_audio_url_prefix() -> String {
    "/".to_string()
}

impl SystemConfig {
    pub fn audio_output_path(&self) -> PathBuf {
        PathBuf::from(&self.audio_output_dir)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Normalise `audio_url_prefix` to a route path (`/` or `/segment[/...]`).
    ///
    /// Prefixes that would be parsed as route parameters or wildcards are rejected.
    pub fn validate(&mut self) -> anyhow::Result<()> {
        let trimmed = self.audio_url_prefix.trim().trim_matches('/');
        if trimmed.contains(|c: char| matches!(c, ':' | '*' | '{' | '}' | '?' | '#')) {
            anyhow::bail!(
                "audio_url_prefix must be a plain path, got {:?}",
                self.audio_url_prefix
            );
        }
        self.audio_url_prefix = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", trimmed)
        };
        Ok(())
    }

    /// Sidecar URL, with `PYTHON_SERVICE_URL` taking precedence over the file
    pub fn resolved_python_service_url(&self) -> Option<String> {
        std::env::var("PYTHON_SERVICE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| self.python_service_url.clone())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            conf_version: default_conf_version(),
            host: default_host(),
            port: default_port(),
            audio_output_dir: default_audio_output_dir(),
            audio_file_name: default_audio_file_name(),
            audio_url_prefix: default_audio_url_prefix(),
            unique_audio_files: false,
            python_service_url: None,
            request_timeout_ms: None,
        }
    }
}
