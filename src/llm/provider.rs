use async_trait::async_trait;
use crate::errors::TestlensError;
use super::types::LLMResponse;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Free-form chat completion: optional system message plus one user message.
    async fn complete(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<LLMResponse, TestlensError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
