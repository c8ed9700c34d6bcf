use std::path::Path;
use crate::errors::TestlensError;
use crate::llm::catalog;
use super::types::TestlensConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

/// Load the configuration file if one was given, defaults otherwise.
pub async fn load_config(path: Option<&Path>) -> Result<TestlensConfig, TestlensError> {
    match path {
        Some(p) => parse_config(p).await,
        None => {
            debug!("No config file given, using defaults");
            Ok(TestlensConfig::default())
        }
    }
}

pub async fn parse_config(path: &Path) -> Result<TestlensConfig, TestlensError> {
    if !path.exists() {
        return Err(TestlensError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(TestlensError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<TestlensConfig, TestlensError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(TestlensConfig::default());
    }

    validate_schema(&yaml)?;

    let mut config: TestlensConfig = serde_yaml::from_value(yaml)?;
    normalize(&mut config);
    validate_values(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), TestlensError> {
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| TestlensError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| TestlensError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| TestlensError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; serde rejects what it cannot read.
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

fn normalize(config: &mut TestlensConfig) {
    let ext = config.data.extension.trim().trim_start_matches('.').to_string();
    config.data.extension = ext;
}

/// Reject values that parse but cannot work.
fn validate_values(config: &TestlensConfig) -> Result<(), TestlensError> {
    let ext = &config.data.extension;
    if ext.is_empty() || ext.contains('/') || ext.contains('\\') {
        return Err(TestlensError::Config(format!("Invalid build file extension: '{}'", ext)));
    }

    if catalog::get_provider(&config.llm.provider).is_none() {
        return Err(TestlensError::Config(format!("Unknown LLM provider: {}", config.llm.provider)));
    }

    if config.llm.timeout_secs == 0 {
        return Err(TestlensError::Config("llm.timeout_secs must be at least 1".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadPolicy;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
data:
  root: /srv/test-results
  extension: .csv
  on_error: skip
llm:
  provider: openai
  model: gpt-4o
  api_key: $OPENAI_API_KEY
  timeout_secs: 30
"#;
        let config = parse_config_str(yaml).unwrap();
        assert_eq!(config.data.root, std::path::PathBuf::from("/srv/test-results"));
        assert_eq!(config.data.extension, "csv");
        assert_eq!(config.data.on_error, LoadPolicy::Skip);
        assert_eq!(config.llm.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.llm.timeout_secs, 30);
    }

    #[test]
    fn test_example_config_parses() {
        let config = parse_config_str(include_str!("../../testlens.example.yaml")).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("$OPENAI_API_KEY"));
        assert_eq!(config.data.on_error, LoadPolicy::Abort);
    }

    #[test]
    fn test_parse_empty_config_is_default() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config.data.extension, "csv");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = parse_config_str("llm:\n  provider: carrier-pigeon\n").unwrap_err();
        assert!(matches!(err, TestlensError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse_config_str("llm:\n  timeout_secs: 0\n").is_err());
    }

    #[test]
    fn test_bad_extension_rejected() {
        assert!(parse_config_str("data:\n  extension: a/b\n").is_err());
    }

    #[test]
    fn test_bad_policy_rejected() {
        let err = parse_config_str("data:\n  on_error: retry\n").unwrap_err();
        assert!(matches!(err, TestlensError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let err = parse_config(Path::new("/nonexistent/testlens.yaml")).await.unwrap_err();
        assert!(matches!(err, TestlensError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_config_none_is_default() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config.llm.provider, "openai");
    }
}
