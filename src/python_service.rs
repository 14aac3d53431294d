use serde::{Deserialize, Serialize};
use anyhow::Result;
use reqwest::Client;

use crate::utils::http::ensure_success;

/// Client for the inference sidecar that hosts models we don't run in-process
#[derive(Debug, Clone)]
pub struct PythonServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GrammarRequest {
    pub text: String,
    pub model: String,
    pub max_length: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GrammarResponse {
    #[serde(default)]
    pub corrected_text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translated_text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TTSRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TTSResponse {
    #[serde(default)]
    pub audio_base64: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl PythonServiceClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn correct_grammar(&self, request: GrammarRequest) -> Result<GrammarResponse> {
        let url = format!("{}/grammar/correct", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let response = ensure_success(response, "python service").await?;
        let result: GrammarResponse = response.json().await?;
        Ok(result)
    }

    pub async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse> {
        let url = format!("{}/translate", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let response = ensure_success(response, "python service").await?;
        let result: TranslateResponse = response.json().await?;
        Ok(result)
    }

    pub async fn synthesize_tts(&self, request: TTSRequest) -> Result<TTSResponse> {
        let url = format!("{}/tts/synthesize", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        let response = ensure_success(response, "python service").await?;
        let result: TTSResponse = response.json().await?;
        Ok(result)
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}
