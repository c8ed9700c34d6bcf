use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::errors::TestlensError;
use crate::llm::catalog;
use super::credentials::resolve_credential;

pub const DEFAULT_DATA_ROOT: &str = "./data";
pub const DEFAULT_EXTENSION: &str = "csv";
pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TestlensConfig {
    pub data: DataConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding one subdirectory per project.
    pub root: PathBuf,
    /// Build file extension, without the leading dot.
    pub extension: String,
    pub on_error: LoadPolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_DATA_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            on_error: LoadPolicy::default(),
        }
    }
}

/// What to do when one build file in a project cannot be loaded.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Stop at the first failing file and report its error.
    #[default]
    Abort,
    /// Log a warning and continue with the remaining files.
    Skip,
}

impl LoadPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl std::fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LLMConfig {
    pub provider: String,
    pub model: Option<String>,
    /// Literal key, or `$VAR` to read it from the environment.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LLMConfig {
    /// Model to request, falling back to the provider's catalog default.
    pub fn model_name(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| catalog::get_default_model(&self.provider).to_string())
    }

    /// Resolve the credential for the configured provider.
    ///
    /// An explicit `api_key` wins; otherwise the provider's environment
    /// variable is read. Providers without an env var (local endpoints)
    /// get an empty key.
    pub fn resolve_api_key(&self) -> Result<String, TestlensError> {
        if let Some(key) = &self.api_key {
            let resolved = resolve_credential(key);
            if resolved.is_empty() || resolved.starts_with('$') {
                return Err(TestlensError::Config(format!(
                    "API key not found. Please set the {} environment variable.",
                    key.trim_start_matches('$')
                )));
            }
            return Ok(resolved);
        }

        let env_var = catalog::get_provider(&self.provider)
            .map(|p| p.env_var)
            .ok_or_else(|| TestlensError::Config(format!("Unknown LLM provider: {}", self.provider)))?;
        if env_var.is_empty() {
            return Ok(String::new());
        }

        match std::env::var(env_var) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(TestlensError::Config(format!(
                "API key not found. Please set the {} environment variable.",
                env_var
            ))),
        }
    }
}
