use serde::{Deserialize, Serialize};

/// Configuration for Google Cloud Translation (v2 REST)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTranslateConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_google_translate_base_url")]
    pub base_url: String,

    #[serde(rename = "api_key")]
    pub api_key: String,
}

fn default_google_translate_base_url() -> String {
    "https://translation.googleapis.com".to_string()
}

/// Configuration for translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// "google_translate" or "python_service"
    #[serde(rename = "translate_model")]
    pub translate_model: String,

    #[serde(rename = "google_translate")]
    #[serde(default)]
    pub google_translate: Option<GoogleTranslateConfig>,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            translate_model: "google_translate".to_string(),
            google_translate: Some(GoogleTranslateConfig {
                base_url: default_google_translate_base_url(),
                api_key: "${GOOGLE_API_KEY}".to_string(),
            }),
        }
    }
}
