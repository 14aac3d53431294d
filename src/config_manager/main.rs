use serde::{Deserialize, Serialize};
use crate::config_manager::grammar::GrammarConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translate::TranslateConfig;
use crate::config_manager::tts::TTSConfig;

/// Main configuration for the application using JSON-LD or YAML format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "grammar_config")]
    pub grammar_config: GrammarConfig,

    #[serde(rename = "translate_config")]
    pub translate_config: TranslateConfig,

    #[serde(rename = "tts_config")]
    pub tts_config: TTSConfig,
}

impl Config {
    /// Load configuration, choosing the parser by file extension
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{parse_jsonld, parse_yaml, read_config_text};

        let content = read_config_text(path)?;
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            parse_jsonld(&content)
        } else {
            parse_yaml(&content)
        }
    }
}
