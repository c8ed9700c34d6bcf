use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestlensError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid project: {0}")]
    InvalidProject(String),

    #[error("Malformed file name: {0}")]
    MalformedFileName(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Billing/quota error: {0}")]
    Billing(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
