use async_trait::async_trait;
use crate::error::Result;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Runs one non-streaming completion and returns the generated text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
    fn name(&self) -> &str;
}
