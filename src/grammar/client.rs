use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::interface::GrammarCorrector;
use crate::python_service::{GrammarRequest, PythonServiceClient};

/// Grammar corrector that delegates inference to the Python service
pub struct GrammarClient {
    python_service: Arc<PythonServiceClient>,
    model: String,
    max_length: u32,
}

impl GrammarClient {
    pub fn new(python_service: Arc<PythonServiceClient>, model: String, max_length: u32) -> Self {
        Self {
            python_service,
            model,
            max_length,
        }
    }
}

#[async_trait]
impl GrammarCorrector for GrammarClient {
    async fn correct(&self, text: &str) -> Result<String, anyhow::Error> {
        let request = GrammarRequest {
            text: text.to_string(),
            model: self.model.clone(),
            max_length: self.max_length,
        };

        let response = self.python_service.correct_grammar(request).await?;
        if response.success {
            debug!("Grammar correction successful: {:?}", response.corrected_text);
            Ok(response.corrected_text)
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Unknown error".to_string());
            Err(anyhow::anyhow!("Grammar correction failed: {}", error_msg))
        }
    }
}
