use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config_manager::grammar::GrammarConfig;
use crate::python_service::PythonServiceClient;
use super::client::GrammarClient;
use super::huggingface::HuggingFaceCorrector;
use super::interface::GrammarCorrector;

/// Factory for creating grammar correctors
pub struct GrammarFactory;

impl GrammarFactory {
    /// Create a grammar corrector based on configuration
    ///
    /// # Arguments
    /// * `grammar_config` - Grammar configuration from config manager
    /// * `http_client` - Shared HTTP client for direct provider calls
    /// * `python_service` - Sidecar client, required by `python_service`
    pub fn create_corrector(
        grammar_config: &GrammarConfig,
        http_client: Client,
        python_service: Option<Arc<PythonServiceClient>>,
    ) -> Result<Arc<dyn GrammarCorrector>> {
        info!("Initializing grammar corrector: {}", grammar_config.grammar_model);

        match grammar_config.grammar_model.as_str() {
            "huggingface_api" => {
                let hf = grammar_config.huggingface_api.clone().ok_or_else(|| {
                    anyhow::anyhow!("grammar_config.huggingface_api is required for huggingface_api")
                })?;
                Ok(Arc::new(HuggingFaceCorrector::new(
                    http_client,
                    hf.base_url,
                    grammar_config.model.clone(),
                    hf.api_key,
                    grammar_config.max_length,
                )))
            }
            "python_service" => {
                let python_service = python_service.ok_or_else(|| {
                    anyhow::anyhow!("python_service_url is required for grammar_model python_service")
                })?;
                Ok(Arc::new(GrammarClient::new(
                    python_service,
                    grammar_config.model.clone(),
                    grammar_config.max_length,
                )))
            }
            other => Err(anyhow::anyhow!("Unsupported grammar model: {}", other)),
        }
    }
}
