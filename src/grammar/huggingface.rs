use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::interface::GrammarCorrector;
use crate::utils::http::ensure_success;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
    clean_up_tokenization_spaces: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Text2text-generation model served by the Hugging Face Inference API
pub struct HuggingFaceCorrector {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    max_length: u32,
}

impl HuggingFaceCorrector {
    pub fn new(
        client: Client,
        base_url: String,
        model: String,
        api_key: Option<String>,
        max_length: u32,
    ) -> Self {
        info!(
            "Initialized HuggingFaceCorrector: model={}, base_url={}",
            model, base_url
        );
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            // an unsubstituted `${VAR}` means no token was provided
            api_key: api_key.filter(|k| !k.is_empty() && !k.starts_with("${")),
            max_length,
        }
    }
}

#[async_trait]
impl GrammarCorrector for HuggingFaceCorrector {
    async fn correct(&self, text: &str) -> Result<String, anyhow::Error> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                max_length: self.max_length,
                clean_up_tokenization_spaces: true,
            },
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = ensure_success(request.send().await?, "grammar model").await?;
        let generated: Vec<GeneratedText> = response.json().await?;
        let corrected = generated
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| anyhow::anyhow!("Grammar model returned no generated text"))?;

        debug!("Grammar correction: {:?} -> {:?}", text, corrected);
        Ok(corrected)
    }
}
