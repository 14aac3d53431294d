//! Correction → translation → synthesis, run strictly in sequence.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::grammar::GrammarCorrector;
use crate::translate::Translator;
use crate::tts::{AudioStore, SpeechArtifact, SpeechSynthesizer};

/// Body of `POST /process-text`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessTextRequest {
    pub user_text: String,
    pub target_language: String,
}

impl ProcessTextRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user_text.trim().is_empty() {
            return Err(AppError::InvalidRequest("user_text must not be empty".to_string()));
        }
        if self.target_language.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "target_language must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTextResponse {
    pub feedback: String,
    pub speech_url: String,
}

/// Everything one pipeline run produced
#[derive(Debug, Clone)]
pub struct Feedback {
    pub corrected_text: String,
    pub translated_text: String,
    pub speech: SpeechArtifact,
}

impl From<Feedback> for ProcessTextResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            feedback: feedback.translated_text,
            speech_url: feedback.speech.url,
        }
    }
}

pub struct FeedbackPipeline {
    corrector: Arc<dyn GrammarCorrector>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: AudioStore,
}

impl FeedbackPipeline {
    pub fn new(
        corrector: Arc<dyn GrammarCorrector>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: AudioStore,
    ) -> Self {
        Self {
            corrector,
            translator,
            synthesizer,
            store,
        }
    }

    pub fn store(&self) -> &AudioStore {
        &self.store
    }

    /// Run one request through all three providers. The first failure aborts the run.
    #[instrument(skip(self, request), fields(target_language = %request.target_language))]
    pub async fn process(&self, request: &ProcessTextRequest) -> Result<Feedback, AppError> {
        request.validate()?;
        let target_language = request.target_language.trim();

        let corrected_text = self
            .corrector
            .correct(&request.user_text)
            .await
            .map_err(AppError::Grammar)?;
        debug!("Corrected text: {:?}", corrected_text);

        let translated_text = self
            .translator
            .translate(&corrected_text, target_language)
            .await
            .map_err(AppError::Translation)?;
        debug!("Translated text: {:?}", translated_text);

        let audio = self
            .synthesizer
            .synthesize(&translated_text, target_language)
            .await
            .map_err(AppError::Synthesis)?;
        if audio.is_empty() {
            return Err(AppError::Synthesis(anyhow::anyhow!(
                "speech provider returned empty audio"
            )));
        }
        let speech = self.store.persist(&audio).await?;

        info!("Processed text feedback, audio at {}", speech.url);
        Ok(Feedback {
            corrected_text,
            translated_text,
            speech,
        })
    }
}
