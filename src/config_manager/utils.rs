use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config_manager::main::Config;

/// Read a configuration file as text
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    Ok(content)
}

/// Replace `${VAR_NAME}` with the variable's value. Unset variables are left verbatim.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                debug!("Environment variable {} is not set, keeping placeholder", var_name);
                caps[0].to_string()
            }
        }
    });
    Ok(replaced.into_owned())
}

/// Substitute placeholders inside every string of a parsed document.
///
/// Runs after parsing so values containing quotes or backslashes stay intact.
pub fn substitute_env_in_value(value: &mut Value) -> Result<()> {
    match value {
        Value::String(s) => {
            if s.contains("${") {
                *s = substitute_env_vars(s)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                substitute_env_in_value(item)?;
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                substitute_env_in_value(item)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Load text file as UTF-8 (BOM stripped), falling back to a lossy decode
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;

    let body = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
    if let Some(content) = encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(body) {
        return Ok(content.into_owned());
    }

    warn!("{} is not valid UTF-8, decoding with replacement characters", file_path);
    let (cow, _, _) = encoding_rs::UTF_8.decode(&bytes);
    Ok(cow.into_owned())
}

/// Parse JSON-LD text. `@context` is accepted and ignored.
pub fn parse_jsonld(content: &str) -> Result<Config> {
    let mut json_value: Value = serde_json::from_str(content)?;
    substitute_env_in_value(&mut json_value)?;
    validate_config(&json_value)
}

pub fn parse_yaml(content: &str) -> Result<Config> {
    let mut json_value: Value = serde_yaml::from_str(content)?;
    substitute_env_in_value(&mut json_value)?;
    validate_config(&json_value)
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: &Value) -> Result<Config> {
    let mut config: Config = serde_json::from_value(config_data.clone())?;
    config.system_config.validate()?;
    Ok(config)
}
