use std::collections::{BTreeMap, BTreeSet};
use serde::Serialize;
use crate::errors::TestlensError;
use crate::models::schema::{require_column, ColumnSpec, STATUS};
use crate::models::{Table, BUILD_ID_COLUMN};

const BUILD_ID: ColumnSpec = ColumnSpec { name: BUILD_ID_COLUMN, aliases: &[] };

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotRow {
    pub build_id: String,
    /// One entry per pivot status, zero when the build had none.
    pub counts: BTreeMap<String, usize>,
}

/// Row counts per (Build ID, status), one row per build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusPivot {
    pub statuses: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl StatusPivot {
    pub fn row(&self, build_id: &str) -> Option<&PivotRow> {
        self.rows.iter().find(|r| r.build_id == build_id)
    }

    pub fn count(&self, build_id: &str, status: &str) -> Option<usize> {
        self.row(build_id)?.counts.get(status).copied()
    }
}

/// Group rows by build and status. Builds and statuses come out in
/// lexicographic order; rows without a status are not counted.
pub fn status_pivot(table: &Table) -> Result<StatusPivot, TestlensError> {
    let status_idx = require_column(table, &STATUS)?;
    let build_idx = require_column(table, &BUILD_ID)?;

    let mut groups: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    let mut statuses: BTreeSet<&str> = BTreeSet::new();
    for row in 0..table.len() {
        let (Some(build), Some(status)) = (table.get(row, build_idx), table.get(row, status_idx)) else {
            continue;
        };
        statuses.insert(status);
        *groups.entry(build).or_default().entry(status).or_default() += 1;
    }

    let rows = groups
        .into_iter()
        .map(|(build_id, observed)| PivotRow {
            build_id: build_id.to_string(),
            counts: statuses
                .iter()
                .map(|s| (s.to_string(), observed.get(s).copied().unwrap_or(0)))
                .collect(),
        })
        .collect();

    Ok(StatusPivot {
        statuses: statuses.into_iter().map(str::to_string).collect(),
        rows,
    })
}
