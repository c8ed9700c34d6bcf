use serde::Serialize;
use crate::aggregate::{aggregate, LoadedFile, SkippedFile};
use crate::catalog::Catalog;
use crate::config::LoadPolicy;
use crate::errors::TestlensError;
use crate::models::{SchemaReport, Table};
use crate::summary::{summarize, SummaryOutcome};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct LoadedReport {
    pub project: String,
    pub files: Vec<LoadedFile>,
    pub skipped: Vec<SkippedFile>,
    pub schema: SchemaReport,
    pub summary: SummaryOutcome,
    pub data: Table,
}

/// Everything shown for one project, rebuilt from disk on every call.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProjectReport {
    /// The project directory holds no build files.
    NoFiles { project: String },
    Loaded(Box<LoadedReport>),
}

impl ProjectReport {
    /// Aggregated rows, when any files were loaded.
    pub fn data(&self) -> Option<&Table> {
        match self {
            ProjectReport::NoFiles { .. } => None,
            ProjectReport::Loaded(report) => Some(&report.data),
        }
    }

    /// What the insight step may run on. Insights are derived only when the
    /// status summary is.
    pub fn insight_input(&self) -> InsightInput<'_> {
        match self {
            ProjectReport::NoFiles { .. } => InsightInput::NoFiles,
            ProjectReport::Loaded(report) if report.data.is_empty() => InsightInput::NoData,
            ProjectReport::Loaded(report) => match report.summary {
                SummaryOutcome::NoStatusColumn => InsightInput::NoStatusColumn,
                SummaryOutcome::Ready(_) => InsightInput::Ready(&report.data),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsightInput<'a> {
    NoFiles,
    NoData,
    NoStatusColumn,
    Ready(&'a Table),
}

pub fn assemble_report(
    catalog: &Catalog,
    project: &str,
    policy: LoadPolicy,
) -> Result<ProjectReport, TestlensError> {
    let files = catalog.build_files(project)?;
    if files.is_empty() {
        warn!(project = %project, extension = %catalog.extension(), "No build files found");
        return Ok(ProjectReport::NoFiles { project: project.to_string() });
    }

    let aggregation = aggregate(&files, policy)?;
    let schema = SchemaReport::inspect(&aggregation.table);
    if !schema.missing.is_empty() {
        info!(project = %project, missing = ?schema.missing, "Recognized columns absent from data");
    }
    let summary = summarize(&aggregation.table)?;

    Ok(ProjectReport::Loaded(Box::new(LoadedReport {
        project: project.to_string(),
        files: aggregation.loaded,
        skipped: aggregation.skipped,
        schema,
        summary,
        data: aggregation.table,
    })))
}
