use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::{info, warn};

use crate::config_manager::translate::TranslateConfig;
use crate::python_service::PythonServiceClient;
use super::client::TranslateClient;
use super::google::GoogleTranslateClient;
use super::interface::Translator;

/// Factory for creating translators
pub struct TranslateFactory;

impl TranslateFactory {
    pub fn create_translator(
        translate_config: &TranslateConfig,
        http_client: Client,
        python_service: Option<Arc<PythonServiceClient>>,
    ) -> Result<Arc<dyn Translator>> {
        info!("Initializing translator: {}", translate_config.translate_model);

        match translate_config.translate_model.as_str() {
            "google_translate" => {
                let google = translate_config.google_translate.clone().ok_or_else(|| {
                    anyhow::anyhow!("translate_config.google_translate is required for google_translate")
                })?;
                if google.api_key.starts_with("${") {
                    warn!("Google Translate API key placeholder was not substituted: {}", google.api_key);
                }
                Ok(Arc::new(GoogleTranslateClient::new(
                    http_client,
                    google.base_url,
                    google.api_key,
                )))
            }
            "python_service" => {
                let python_service = python_service.ok_or_else(|| {
                    anyhow::anyhow!("python_service_url is required for translate_model python_service")
                })?;
                Ok(Arc::new(TranslateClient::new(python_service)))
            }
            other => Err(anyhow::anyhow!("Unsupported translate model: {}", other)),
        }
    }
}
