use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Voice gender requested from providers that support selecting one
pub const DEFAULT_SSML_GENDER: &str = "NEUTRAL";

/// Audio encoding requested from providers; the store names files `.mp3`
pub const AUDIO_ENCODING: &str = "MP3";

/// Reference to a persisted speech file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechArtifact {
    /// URL path clients fetch the audio from, e.g. `/output.mp3`
    pub url: String,
    /// Filesystem location the audio was written to
    pub path: std::path::PathBuf,
}

/// Text-to-speech interface
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the provider's default voice for `language_code`.
    ///
    /// # Returns
    /// Encoded MP3 bytes
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, anyhow::Error>;
}
