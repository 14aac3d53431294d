use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::interface::Translator;
use crate::python_service::{PythonServiceClient, TranslateRequest};

/// Translator that delegates to the Python service
pub struct TranslateClient {
    python_service: Arc<PythonServiceClient>,
}

impl TranslateClient {
    pub fn new(python_service: Arc<PythonServiceClient>) -> Self {
        Self { python_service }
    }
}

#[async_trait]
impl Translator for TranslateClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, anyhow::Error> {
        let request = TranslateRequest {
            text: text.to_string(),
            target_lang: target_language.to_string(),
        };

        let response = self.python_service.translate(request).await?;
        if response.success {
            debug!("Translation successful: {:?}", response.translated_text);
            Ok(response.translated_text)
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Unknown error".to_string());
            Err(anyhow::anyhow!("Translation failed: {}", error_msg))
        }
    }
}
