use std::collections::HashMap;
use serde::Serialize;
use crate::models::status_color;
use super::latest::LatestStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
    /// Fixed chart color; `None` for statuses outside the known set.
    pub color: Option<&'static str>,
}

/// Count status values over the latest-status view, most frequent first
/// (ties by status text). Rows without a status are not counted.
pub fn status_distribution(latest: &[LatestStatus]) -> Vec<StatusCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in latest {
        if let Some(status) = row.status.as_deref() {
            *counts.entry(status).or_default() += 1;
        }
    }

    let mut distribution: Vec<StatusCount> = counts
        .into_iter()
        .map(|(status, count)| StatusCount {
            status: status.to_string(),
            count,
            color: status_color(status),
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));
    distribution
}
