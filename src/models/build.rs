use serde::Serialize;
use crate::errors::TestlensError;

pub const BUILD_ID_COLUMN: &str = "Build ID";
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Build metadata carried by a file name of the form
/// `<prefix>_<buildId>_<timestamp>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTag {
    pub build_id: String,
    pub timestamp: String,
}

impl BuildTag {
    /// Parse a bare file name. The build id is the second `_` segment and the
    /// timestamp is the third segment up to its first `.`; anything after a
    /// third `_` is ignored.
    pub fn parse(file_name: &str) -> Result<Self, TestlensError> {
        let parts: Vec<&str> = file_name.split('_').collect();
        if parts.len() < 3 {
            return Err(TestlensError::MalformedFileName(format!(
                "'{}' does not match <prefix>_<buildId>_<timestamp>.<ext>",
                file_name
            )));
        }

        let timestamp = parts[2].split('.').next().unwrap_or_default();
        Ok(Self {
            build_id: parts[1].to_string(),
            timestamp: timestamp.to_string(),
        })
    }
}
