use serde::{Deserialize, Serialize};

/// Configuration for the Hugging Face Inference API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceGrammarConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_huggingface_base_url")]
    pub base_url: String,

    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_huggingface_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

impl Default for HuggingFaceGrammarConfig {
    fn default() -> Self {
        Self {
            base_url: default_huggingface_base_url(),
            api_key: None,
        }
    }
}

/// Configuration for grammar correction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// "huggingface_api" or "python_service"
    #[serde(rename = "grammar_model")]
    pub grammar_model: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "max_length")]
    #[serde(default = "default_max_length")]
    pub max_length: u32,

    #[serde(rename = "huggingface_api")]
    #[serde(default)]
    pub huggingface_api: Option<HuggingFaceGrammarConfig>,
}

fn default_model() -> String {
    "vennify/t5-base-grammar-correction".to_string()
}

fn default_max_length() -> u32 {
    512
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            grammar_model: "huggingface_api".to_string(),
            model: default_model(),
            max_length: default_max_length(),
            huggingface_api: Some(HuggingFaceGrammarConfig::default()),
        }
    }
}
