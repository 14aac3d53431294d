use async_trait::async_trait;

/// Translation interface
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_language` (e.g. "es", "zh-CN").
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, anyhow::Error>;
}
