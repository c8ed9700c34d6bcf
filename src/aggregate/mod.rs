pub mod loader;

use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::config::LoadPolicy;
use crate::errors::TestlensError;
use crate::models::{BuildTag, Table, BUILD_ID_COLUMN, TIMESTAMP_COLUMN};
use tracing::{debug, info, warn};

pub use loader::load_csv;

#[derive(Debug, Clone, Serialize)]
pub struct LoadedFile {
    pub file: String,
    pub tag: BuildTag,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub error: String,
}

/// All rows of one project plus a record of which files contributed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Aggregation {
    pub table: Table,
    pub loaded: Vec<LoadedFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Load one build file and tag every row with its `Build ID` and `Timestamp`.
pub fn load_tagged(path: &Path) -> Result<(BuildTag, Table), TestlensError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TestlensError::MalformedFileName(path.display().to_string()))?;
    let tag = BuildTag::parse(file_name)?;

    let mut table = load_csv(path)?;
    table.set_constant_column(BUILD_ID_COLUMN, &tag.build_id);
    table.set_constant_column(TIMESTAMP_COLUMN, &tag.timestamp);
    Ok((tag, table))
}

/// Concatenate the tagged rows of every file, in the order given.
///
/// Under [`LoadPolicy::Abort`] the first failing file ends the load with its
/// error; under [`LoadPolicy::Skip`] it is logged and left out.
pub fn aggregate(files: &[PathBuf], policy: LoadPolicy) -> Result<Aggregation, TestlensError> {
    let mut aggregation = Aggregation::default();

    for path in files {
        let file = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        match load_tagged(path) {
            Ok((tag, table)) => {
                debug!(file = %file, build_id = %tag.build_id, rows = table.len(), "Loaded build file");
                aggregation.loaded.push(LoadedFile { file, tag, rows: table.len() });
                aggregation.table.append(table);
            }
            Err(e) => match policy {
                LoadPolicy::Abort => return Err(e),
                LoadPolicy::Skip => {
                    warn!(file = %file, error = %e, "Skipping unreadable build file");
                    aggregation.skipped.push(SkippedFile { file, error: e.to_string() });
                }
            },
        }
    }

    info!(
        files = aggregation.loaded.len(),
        skipped = aggregation.skipped.len(),
        rows = aggregation.table.len(),
        "Aggregated build files"
    );
    Ok(aggregation)
}
