use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::interface::Translator;
use crate::utils::http::ensure_success;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

/// Google Cloud Translation v2 over REST
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleTranslateClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        info!("Initialized GoogleTranslateClient: base_url={}", base_url);
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, anyhow::Error> {
        let url = format!("{}/language/translate/v2", self.base_url);
        let body = TranslateRequest {
            q: text,
            target: target_language,
            format: "text",
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response, "translation service").await?;
        let result: TranslateResponse = response.json().await?;

        let translation = result
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Translation service returned no translations"))?;

        debug!(
            "Translated {:?} ({:?} -> {}): {:?}",
            text, translation.detected_source_language, target_language, translation.translated_text
        );
        Ok(translation.translated_text)
    }
}
