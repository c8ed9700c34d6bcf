pub mod commands;
pub mod projects;
pub mod report;
pub mod insights;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::{Path, PathBuf};
use crate::config::{self, LoadPolicy, TestlensConfig};
use crate::errors::TestlensError;
use commands::DataArgs;

/// Config file (if any) with command-line overrides applied.
pub async fn resolve_config(config_path: Option<&str>, data: &DataArgs) -> Result<TestlensConfig, TestlensError> {
    let mut config = config::load_config(config_path.map(Path::new)).await?;
    if let Some(root) = &data.data_root {
        config.data.root = PathBuf::from(root);
    }
    if data.skip_bad_files {
        config.data.on_error = LoadPolicy::Skip;
    }
    Ok(config)
}
