use serde::Serialize;
use crate::errors::TestlensError;
use super::table::Table;

/// A recognized input column and the header spellings accepted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

pub const TC_ID: ColumnSpec = ColumnSpec { name: "tc_id", aliases: &[] };
pub const STATUS: ColumnSpec = ColumnSpec { name: "status", aliases: &[] };
pub const EXECUTION_END: ColumnSpec = ColumnSpec { name: "execution_end", aliases: &[] };
pub const PRIORITY: ColumnSpec = ColumnSpec { name: "priority", aliases: &[] };
pub const FEATURE: ColumnSpec = ColumnSpec { name: "feature", aliases: &[] };
// Some exporters write the header misspelled.
pub const CATEGORY: ColumnSpec = ColumnSpec { name: "category", aliases: &["categoty"] };

pub const RECOGNIZED: [ColumnSpec; 6] = [TC_ID, STATUS, EXECUTION_END, PRIORITY, FEATURE, CATEGORY];

/// Index of the column for `spec`, trying the canonical name then aliases.
pub fn resolve_column(table: &Table, spec: &ColumnSpec) -> Option<usize> {
    table
        .column_index(spec.name)
        .or_else(|| spec.aliases.iter().find_map(|a| table.column_index(a)))
}

pub fn require_column(table: &Table, spec: &ColumnSpec) -> Result<usize, TestlensError> {
    resolve_column(table, spec).ok_or_else(|| TestlensError::MissingColumn(spec.name.to_string()))
}

/// Resolve every column in order, failing on the first one that is absent.
pub fn require_columns(table: &Table, specs: &[ColumnSpec]) -> Result<Vec<usize>, TestlensError> {
    specs.iter().map(|spec| require_column(table, spec)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub name: &'static str,
    /// Header actually found in the data.
    pub header: String,
}

/// Which recognized columns an aggregated table carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub present: Vec<ResolvedColumn>,
    pub missing: Vec<&'static str>,
}

impl SchemaReport {
    pub fn inspect(table: &Table) -> Self {
        let mut report = Self::default();
        for spec in &RECOGNIZED {
            match resolve_column(table, spec) {
                Some(idx) => report.present.push(ResolvedColumn {
                    name: spec.name,
                    header: table.columns()[idx].clone(),
                }),
                None => report.missing.push(spec.name),
            }
        }
        report
    }
}
