use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::{info, warn};

use crate::config_manager::tts::TTSConfig;
use crate::python_service::PythonServiceClient;
use super::client::TTSClient;
use super::google::GoogleTTSClient;
use super::interface::SpeechSynthesizer;

/// Factory for creating TTS engines/clients
pub struct TTSFactory;

impl TTSFactory {
    /// Create a TTS client based on configuration
    ///
    /// # Arguments
    /// * `tts_config` - TTS configuration from config manager
    /// * `http_client` - Shared HTTP client for direct provider calls
    /// * `python_service` - Sidecar client, required by `python_service`
    pub fn create_tts(
        tts_config: &TTSConfig,
        http_client: Client,
        python_service: Option<Arc<PythonServiceClient>>,
    ) -> Result<Arc<dyn SpeechSynthesizer>> {
        info!("Initializing TTS engine: {}", tts_config.tts_model);

        match tts_config.tts_model.as_str() {
            "google_tts" => {
                let google = tts_config.google_tts.clone().ok_or_else(|| {
                    anyhow::anyhow!("tts_config.google_tts is required for google_tts")
                })?;
                if google.api_key.starts_with("${") {
                    warn!("Google TTS API key placeholder was not substituted: {}", google.api_key);
                }
                Ok(Arc::new(GoogleTTSClient::new(
                    http_client,
                    google.base_url,
                    google.api_key,
                    google.ssml_gender,
                )))
            }
            "python_service" => {
                let python_service = python_service.ok_or_else(|| {
                    anyhow::anyhow!("python_service_url is required for tts_model python_service")
                })?;
                Ok(Arc::new(TTSClient::new(python_service)))
            }
            other => Err(anyhow::anyhow!("Unsupported TTS model: {}", other)),
        }
    }
}
