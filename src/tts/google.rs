use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::interface::{SpeechSynthesizer, AUDIO_ENCODING};
use crate::utils::http::ensure_success;

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    ssml_gender: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

/// Google Cloud Text-to-Speech v1 over REST
pub struct GoogleTTSClient {
    client: Client,
    base_url: String,
    api_key: String,
    ssml_gender: String,
}

impl GoogleTTSClient {
    pub fn new(client: Client, base_url: String, api_key: String, ssml_gender: String) -> Self {
        info!(
            "Initialized GoogleTTSClient: base_url={}, ssml_gender={}",
            base_url, ssml_gender
        );
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            ssml_gender,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTTSClient {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, anyhow::Error> {
        let url = format!("{}/v1/text:synthesize", self.base_url);
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code,
                ssml_gender: &self.ssml_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response, "speech service").await?;
        let result: SynthesizeResponse = response.json().await?;

        let audio = base64::engine::general_purpose::STANDARD.decode(result.audio_content)?;
        debug!("Synthesized {} bytes of audio for language {}", audio.len(), language_code);
        Ok(audio)
    }
}
