use std::collections::BTreeMap;
use serde::Serialize;
use crate::errors::TestlensError;
use crate::models::schema::{require_columns, FEATURE, STATUS};
use crate::models::{Status, Table};

/// Numbers handed to the language model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsightStats {
    pub total: usize,
    pub status_counts: BTreeMap<Status, usize>,
    /// Failing rows per feature, for rows whose status is `fail`.
    pub feature_failures: BTreeMap<String, usize>,
}

impl InsightStats {
    pub fn from_table(table: &Table) -> Result<Self, TestlensError> {
        let idx = require_columns(table, &[STATUS, FEATURE])?;
        let (status_idx, feature_idx) = (idx[0], idx[1]);

        let mut stats = Self {
            total: table.len(),
            status_counts: Status::ALL.into_iter().map(|s| (s, 0)).collect(),
            feature_failures: BTreeMap::new(),
        };

        for row in 0..table.len() {
            let Some(status) = table.get(row, status_idx).and_then(Status::parse) else {
                continue;
            };
            *stats.status_counts.entry(status).or_default() += 1;

            if status == Status::Fail {
                if let Some(feature) = table.get(row, feature_idx) {
                    *stats.feature_failures.entry(feature.to_string()).or_default() += 1;
                }
            }
        }

        Ok(stats)
    }

    pub fn count(&self, status: Status) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    /// Features ordered by failure count, highest first.
    pub fn ranked_failures(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .feature_failures
            .iter()
            .map(|(f, c)| (f.as_str(), *c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
