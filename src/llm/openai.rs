use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::TestlensError;
use super::catalog;
use super::provider::LLMProvider;
use super::types::{LLMResponse, Message};
use tracing::debug;

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(
        api_key: &str,
        model: Option<&str>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, TestlensError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key: api_key.to_string(),
            model: model.unwrap_or_else(|| catalog::get_default_model("openai")).to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, TestlensError> {
        let messages = Message::exchange(prompt, system);
        chat_completion(&self.client, &self.base_url, Some(&self.api_key), &self.model, &messages, "OpenAI").await
    }

    fn provider_name(&self) -> &str { "openai" }
    fn model_name(&self) -> &str { &self.model }
}

pub(crate) fn build_client(timeout: Duration) -> Result<Client, TestlensError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TestlensError::Internal(format!("Failed to build HTTP client: {}", e)))
}

/// POST an OpenAI-style `/chat/completions` request and map the reply.
pub(crate) async fn chat_completion(
    client: &Client,
    base_url: &str,
    api_key: Option<&str>,
    model: &str,
    messages: &[Message],
    label: &str,
) -> Result<LLMResponse, TestlensError> {
    let body = json!({
        "model": model,
        "messages": messages,
    });

    let mut request = client
        .post(format!("{}/chat/completions", base_url))
        .json(&body);
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        request = request.header("Authorization", format!("Bearer {}", key));
    }

    let resp = request
        .send()
        .await
        .map_err(|e| TestlensError::Network(format!("{} request failed: {}", label, e)))?;

    let status = resp.status();
    if status.as_u16() == 401 {
        return Err(TestlensError::Authentication(format!("Invalid {} API key", label)));
    }
    if status.as_u16() == 429 {
        let text = resp.text().await.unwrap_or_default();
        if is_quota_message(&text) {
            return Err(TestlensError::Billing(format!("{} quota exceeded", label)));
        }
        return Err(TestlensError::RateLimit(format!("{} rate limit", label)));
    }

    let data: Value = resp.json().await
        .map_err(|e| TestlensError::LLMApi(format!("Failed to parse {} response: {}", label, e)))?;

    if let Some(error) = data.get("error") {
        let msg = error["message"].as_str().unwrap_or("Unknown error");
        if is_quota_message(msg) {
            return Err(TestlensError::Billing(msg.to_string()));
        }
        return Err(TestlensError::LLMApi(msg.to_string()));
    }
    if !status.is_success() {
        return Err(TestlensError::LLMApi(format!("{} returned HTTP {}", label, status)));
    }

    let content = data["choices"][0]["message"]["content"].as_str()
        .ok_or_else(|| TestlensError::LLMApi(format!("No content in {} response", label)))?
        .to_string();
    let input_tokens = data["usage"]["prompt_tokens"].as_u64();
    let output_tokens = data["usage"]["completion_tokens"].as_u64();

    debug!(model = %model, input_tokens, output_tokens, "{} completion", label);

    Ok(LLMResponse {
        content,
        input_tokens,
        output_tokens,
        model: model.to_string(),
    })
}

fn is_quota_message(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("quota") || lower.contains("billing")
}
