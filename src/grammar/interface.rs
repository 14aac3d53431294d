use async_trait::async_trait;

/// Grammar correction interface
#[async_trait]
pub trait GrammarCorrector: Send + Sync {
    /// Rewrite `text` with its grammatical errors fixed.
    ///
    /// Output length is bounded by the model's configured `max_length`;
    /// truncation beyond that is left to the model.
    async fn correct(&self, text: &str) -> Result<String, anyhow::Error>;
}
