use async_trait::async_trait;
use base64::Engine;
use std::sync::Arc;
use tracing::debug;

use super::interface::SpeechSynthesizer;
use crate::python_service::{PythonServiceClient, TTSRequest};

/// TTS client that communicates with the Python TTS service
pub struct TTSClient {
    python_service: Arc<PythonServiceClient>,
}

impl TTSClient {
    pub fn new(python_service: Arc<PythonServiceClient>) -> Self {
        Self { python_service }
    }
}

#[async_trait]
impl SpeechSynthesizer for TTSClient {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, anyhow::Error> {
        let request = TTSRequest {
            text: text.to_string(),
            language: language_code.to_string(),
        };

        debug!("Sending TTS request: text={}, language={}", text, language_code);
        let response = self.python_service.synthesize_tts(request).await?;

        if response.success {
            let audio = base64::engine::general_purpose::STANDARD.decode(response.audio_base64)?;
            debug!("TTS synthesis successful: {} bytes", audio.len());
            Ok(audio)
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Unknown error".to_string());
            Err(anyhow::anyhow!("TTS synthesis failed: {}", error_msg))
        }
    }
}
