pub mod timestamp;
pub mod pivot;
pub mod latest;
pub mod distribution;

use serde::Serialize;
use crate::errors::TestlensError;
use crate::models::schema::{resolve_column, STATUS};
use crate::models::Table;
use tracing::{debug, info};

pub use distribution::{status_distribution, StatusCount};
pub use latest::{latest_status, LatestStatus};
pub use pivot::{status_pivot, PivotRow, StatusPivot};
pub use timestamp::parse_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub pivot: StatusPivot,
    pub latest: Vec<LatestStatus>,
    pub distribution: Vec<StatusCount>,
}

/// Result of the status derivations over one aggregated table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// The data has no `status` column; nothing to aggregate.
    NoStatusColumn,
    Ready(Summary),
}

pub fn summarize(table: &Table) -> Result<SummaryOutcome, TestlensError> {
    if resolve_column(table, &STATUS).is_none() {
        debug!(columns = ?table.columns(), "No status column, skipping aggregation");
        return Ok(SummaryOutcome::NoStatusColumn);
    }

    let pivot = status_pivot(table)?;
    let latest = latest_status(table)?;
    let distribution = status_distribution(&latest);

    info!(
        builds = pivot.rows.len(),
        statuses = pivot.statuses.len(),
        test_cases = latest.len(),
        "Summarized test executions"
    );
    Ok(SummaryOutcome::Ready(Summary { pivot, latest, distribution }))
}
