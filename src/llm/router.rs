use std::time::Duration;
use crate::config::LLMConfig;
use crate::errors::TestlensError;
use super::provider::LLMProvider;
use super::openai::OpenAIProvider;
use super::local::LocalProvider;
use super::catalog;

/// Configured base URL, or the provider's catalog default.
pub fn resolve_base_url(config: &LLMConfig) -> Result<&str, TestlensError> {
    if let Some(url) = config.base_url.as_deref() {
        return Ok(url);
    }
    catalog::get_provider(&config.provider)
        .map(|p| p.base_url)
        .ok_or_else(|| TestlensError::Config(format!("Unknown LLM provider: {}", config.provider)))
}

/// Build the provider named in the config, using an already-resolved key.
pub fn create_provider(config: &LLMConfig, api_key: &str) -> Result<Box<dyn LLMProvider>, TestlensError> {
    let model = config.model_name();
    let timeout = Duration::from_secs(config.timeout_secs);
    let url = resolve_base_url(config)?;

    match config.provider.as_str() {
        "openai" => Ok(Box::new(OpenAIProvider::new(api_key, Some(&model), url, timeout)?)),
        "local" => Ok(Box::new(LocalProvider::new(url, Some(&model), api_key, timeout)?)),
        other => Err(TestlensError::Config(format!("Unknown LLM provider: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_openai_provider() {
        let provider = create_provider(&LLMConfig::default(), "sk-test").unwrap();
        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.model_name(), "gpt-4");
    }

    #[test]
    fn test_create_local_provider() {
        let config = LLMConfig { provider: "local".into(), ..Default::default() };
        let provider = create_provider(&config, "").unwrap();
        assert_eq!(provider.provider_name(), "local");
        assert_eq!(provider.model_name(), "qwen2.5-coder:1.5b");
    }

    #[test]
    fn test_base_url_from_catalog() {
        assert_eq!(resolve_base_url(&LLMConfig::default()).unwrap(), "https://api.openai.com/v1");
        let local = LLMConfig { provider: "local".into(), ..Default::default() };
        assert_eq!(resolve_base_url(&local).unwrap(), "http://localhost:11434/v1");
    }

    #[test]
    fn test_configured_base_url_wins() {
        let config = LLMConfig { base_url: Some("http://proxy.internal/v1".into()), ..Default::default() };
        assert_eq!(resolve_base_url(&config).unwrap(), "http://proxy.internal/v1");
    }

    #[test]
    fn test_unknown_provider() {
        let config = LLMConfig { provider: "anthropic".into(), ..Default::default() };
        assert!(matches!(create_provider(&config, "k"), Err(TestlensError::Config(_))));
    }
}
