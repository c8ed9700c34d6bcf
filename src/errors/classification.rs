use super::types::TestlensError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Process exit code used by the CLI.
    pub exit_code: i32,
    /// True when the failure comes from the data on disk rather than the
    /// environment or a remote service.
    pub input_error: bool,
}

impl ErrorClassification {
    const fn input(error_type: &'static str) -> Self {
        Self { error_type, exit_code: 3, input_error: true }
    }

    const fn other(error_type: &'static str, exit_code: i32) -> Self {
        Self { error_type, exit_code, input_error: false }
    }
}

impl TestlensError {
    /// Classify this error to determine its stable name and exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Malformed data in the project directory
            TestlensError::MalformedFileName(_) => ErrorClassification::input("MalformedFileNameError"),
            TestlensError::Csv(_) => ErrorClassification::input("CsvError"),
            TestlensError::MissingColumn(_) => ErrorClassification::input("MissingColumnError"),
            TestlensError::InvalidTimestamp(_) => ErrorClassification::input("InvalidTimestampError"),

            // Setup problems
            TestlensError::Config(_) => ErrorClassification::other("ConfigError", 2),
            TestlensError::InvalidProject(_) => ErrorClassification::other("InvalidProjectError", 2),
            TestlensError::Yaml(_) => ErrorClassification::other("YamlError", 2),

            // Remote service
            TestlensError::Authentication(_) => ErrorClassification::other("AuthenticationError", 4),
            TestlensError::RateLimit(_) => ErrorClassification::other("RateLimitError", 1),
            TestlensError::Billing(_) => ErrorClassification::other("BillingError", 1),
            TestlensError::Network(_) => ErrorClassification::other("NetworkError", 1),
            TestlensError::LLMApi(_) => ErrorClassification::other("LLMApiError", 1),

            TestlensError::Io(_) => ErrorClassification::other("IoError", 1),
            TestlensError::Json(_) => ErrorClassification::other("JsonError", 1),
            TestlensError::Internal(_) => ErrorClassification::other("InternalError", 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_file_name_is_input_error() {
        let err = TestlensError::MalformedFileName("run.csv".into());
        let class = err.classify();
        assert!(class.input_error);
        assert_eq!(class.exit_code, 3);
        assert_eq!(class.error_type, "MalformedFileNameError");
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = TestlensError::Config("OPENAI_API_KEY not set".into());
        let class = err.classify();
        assert!(!class.input_error);
        assert_eq!(class.exit_code, 2);
    }

    #[test]
    fn test_auth_error_exit_code() {
        let err = TestlensError::Authentication("bad key".into());
        assert_eq!(err.classify().exit_code, 4);
        assert_eq!(err.classify().error_type, "AuthenticationError");
    }

    #[test]
    fn test_invalid_timestamp_is_input_error() {
        let err = TestlensError::InvalidTimestamp("yesterday".into());
        assert!(err.classify().input_error);
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TestlensError = io.into();
        assert_eq!(err.classify().error_type, "IoError");
        assert!(err.to_string().contains("gone"));
    }
}
