use crate::config::credentials::redact_credentials;
use crate::config::LLMConfig;
use crate::errors::TestlensError;
use crate::llm::{create_provider, LLMProvider};
use crate::models::Table;
use super::prompt::{build_prompt, SYSTEM_PROMPT};
use super::stats::InsightStats;
use tracing::{info, warn};

/// Turns an aggregated table into model-written commentary.
pub struct InsightRequester {
    provider: Box<dyn LLMProvider>,
    secrets: Vec<String>,
}

impl InsightRequester {
    pub fn new(provider: Box<dyn LLMProvider>) -> Self {
        Self { provider, secrets: Vec::new() }
    }

    /// Resolve the credential and build the provider. A missing key is a
    /// `Config` error, so callers can refuse to start without one.
    pub fn from_config(config: &LLMConfig) -> Result<Self, TestlensError> {
        let api_key = config.resolve_api_key()?;
        let provider = create_provider(config, &api_key)?;
        Ok(Self { provider, secrets: vec![api_key] })
    }

    pub fn provider(&self) -> &dyn LLMProvider {
        self.provider.as_ref()
    }

    /// Single completion request; errors are returned as-is.
    pub async fn request(&self, stats: &InsightStats) -> Result<String, TestlensError> {
        let prompt = build_prompt(stats);
        let response = self.provider.complete(&prompt, Some(SYSTEM_PROMPT)).await?;
        info!(
            provider = self.provider.provider_name(),
            model = %response.model,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Generated insights"
        );
        Ok(response.content)
    }

    /// Commentary for `table`, or a displayable error message. Never fails.
    pub async fn generate(&self, table: &Table) -> String {
        let result = match InsightStats::from_table(table) {
            Ok(stats) => self.request(&stats).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                let secrets: Vec<&str> = self.secrets.iter().map(String::as_str).collect();
                let message = redact_credentials(&e.to_string(), &secrets);
                warn!(error_type = e.classify().error_type, error = %message, "Insight request failed");
                format!("Error generating insights: {}", message)
            }
        }
    }
}
