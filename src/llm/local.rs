use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::errors::TestlensError;
use super::catalog;
use super::openai::{build_client, chat_completion};
use super::provider::LLMProvider;
use super::types::{LLMResponse, Message};

pub struct LocalProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl LocalProvider {
    pub fn new(
        base_url: &str,
        model: Option<&str>,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, TestlensError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.unwrap_or_else(|| catalog::get_default_model("local")).to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for LocalProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, TestlensError> {
        let messages = Message::exchange(prompt, system);
        chat_completion(&self.client, &self.base_url, Some(&self.api_key), &self.model, &messages, "Local LLM").await
    }

    fn provider_name(&self) -> &str { "local" }
    fn model_name(&self) -> &str { &self.model }
}
