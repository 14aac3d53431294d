use serde::{Deserialize, Serialize};

/// Configuration for Google Cloud Text-to-Speech (v1 REST)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTTSConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_google_tts_base_url")]
    pub base_url: String,

    #[serde(rename = "api_key")]
    pub api_key: String,

    #[serde(rename = "ssml_gender")]
    #[serde(default = "default_ssml_gender")]
    pub ssml_gender: String,
}

fn default_google_tts_base_url() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

fn default_ssml_gender() -> String {
    crate::tts::interface::DEFAULT_SSML_GENDER.to_string()
}

/// Configuration for Text-to-Speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    /// "google_tts" or "python_service"
    #[serde(rename = "tts_model")]
    pub tts_model: String,

    #[serde(rename = "google_tts")]
    #[serde(default)]
    pub google_tts: Option<GoogleTTSConfig>,
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            tts_model: "google_tts".to_string(),
            google_tts: Some(GoogleTTSConfig {
                base_url: default_google_tts_base_url(),
                api_key: "${GOOGLE_API_KEY}".to_string(),
                ssml_gender: default_ssml_gender(),
            }),
        }
    }
}
