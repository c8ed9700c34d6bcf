use std::cmp::Ordering;
use chrono::NaiveDateTime;
use serde::Serialize;
use crate::errors::TestlensError;
use crate::models::schema::{require_columns, EXECUTION_END, STATUS, TC_ID};
use crate::models::Table;
use super::timestamp::parse_timestamp;

/// Projection of the row kept for one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestStatus {
    pub tc_id: Option<String>,
    pub status: Option<String>,
    pub execution_end: Option<NaiveDateTime>,
}

/// One row per distinct `tc_id`: the first row after a stable ascending sort
/// on `tc_id`.
///
/// The pick does not look at `execution_end`; for a test case seen in several
/// builds it is whichever row was loaded first. Every non-empty
/// `execution_end` must still parse, or the whole view fails.
pub fn latest_status(table: &Table) -> Result<Vec<LatestStatus>, TestlensError> {
    let idx = require_columns(table, &[TC_ID, STATUS, EXECUTION_END])?;
    let (tc_idx, status_idx, end_idx) = (idx[0], idx[1], idx[2]);

    let mut ends = Vec::with_capacity(table.len());
    for value in table.column_values(end_idx) {
        let parsed = match value {
            Some(v) => Some(parse_timestamp(v).ok_or_else(|| {
                TestlensError::InvalidTimestamp(format!("execution_end '{}' is not a date", v))
            })?),
            None => None,
        };
        ends.push(parsed);
    }

    let ids: Vec<Option<&str>> = table.column_values(tc_idx).collect();
    let numeric = ids.iter().flatten().all(|id| id.trim().parse::<f64>().is_ok());

    let mut order: Vec<usize> = (0..table.len()).collect();
    order.sort_by(|&a, &b| compare_tc_ids(ids[a], ids[b], numeric));

    // Groups are contiguous after the sort, and "1" and "001" share one.
    let mut latest = Vec::new();
    let mut group_start: Option<usize> = None;
    for row in order {
        if let Some(first) = group_start {
            if compare_tc_ids(ids[first], ids[row], numeric) == Ordering::Equal {
                continue;
            }
        }
        group_start = Some(row);
        latest.push(LatestStatus {
            tc_id: ids[row].map(str::to_string),
            status: table.get(row, status_idx).map(str::to_string),
            execution_end: ends[row],
        });
    }

    Ok(latest)
}

/// Ids compare as numbers when every id in the column is numeric, as text
/// otherwise. Absent ids sort last.
fn compare_tc_ids(a: Option<&str>, b: Option<&str>, numeric: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) if numeric => {
            let x: f64 = a.trim().parse().unwrap_or(f64::NAN);
            let y: f64 = b.trim().parse().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
        }
        (Some(a), Some(b)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(Option<&str>, &str, Option<&str>)]) -> Table {
        let mut t = Table::new(vec!["tc_id".into(), "status".into(), "execution_end".into()]);
        for (id, status, end) in rows {
            t.push_row(vec![id.map(str::to_string), Some(status.to_string()), end.map(str::to_string)]);
        }
        t
    }

    #[test]
    fn test_one_row_per_tc_id() {
        let t = table(&[
            (Some("tc2"), "pass", Some("2024-01-01 10:00")),
            (Some("tc1"), "fail", Some("2024-01-01 10:00")),
            (Some("tc2"), "fail", Some("2024-01-02 10:00")),
            (Some("tc3"), "pass", Some("2024-01-02 10:00")),
        ]);
        let latest = latest_status(&t).unwrap();
        let ids: Vec<_> = latest.iter().map(|r| r.tc_id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["tc1", "tc2", "tc3"]);
    }

    // Selection follows load order among equal ids, not recency.
    #[test]
    fn test_keeps_first_loaded_not_most_recent() {
        let t = table(&[
            (Some("tc1"), "pass", Some("2024-01-01 09:00")),
            (Some("tc1"), "fail", Some("2024-03-01 09:00")),
        ]);
        let latest = latest_status(&t).unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].status.as_deref(), Some("pass"));
        assert_eq!(latest[0].execution_end, parse_timestamp("2024-01-01 09:00"));
    }

    #[test]
    fn test_numeric_ids_sort_numerically() {
        let t = table(&[
            (Some("10"), "pass", None),
            (Some("9"), "fail", None),
            (Some("100"), "pass", None),
        ]);
        let ids: Vec<_> = latest_status(&t).unwrap().into_iter().map(|r| r.tc_id.unwrap()).collect();
        assert_eq!(ids, vec!["9", "10", "100"]);
    }

    #[test]
    fn test_numeric_ids_equal_by_value_share_a_row() {
        let t = table(&[
            (Some("001"), "fail", None),
            (Some("2"), "pass", None),
            (Some("1"), "pass", None),
            (Some("1.0"), "pass", None),
        ]);
        let latest = latest_status(&t).unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].tc_id.as_deref(), Some("001"));
        assert_eq!(latest[0].status.as_deref(), Some("fail"));
    }

    #[test]
    fn test_text_ids_compare_exactly() {
        let t = table(&[(Some("tc01"), "fail", None), (Some("tc1"), "pass", None)]);
        assert_eq!(latest_status(&t).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_ids_grouped_last() {
        let t = table(&[(None, "pass", None), (Some("tc1"), "fail", None), (None, "fail", None)]);
        let latest = latest_status(&t).unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[1].tc_id, None);
        assert_eq!(latest[1].status.as_deref(), Some("pass"));
    }

    #[test]
    fn test_unparseable_execution_end_fails_view() {
        let t = table(&[
            (Some("tc1"), "pass", Some("2024-01-01")),
            (Some("tc2"), "pass", Some("soon")),
        ]);
        assert!(matches!(latest_status(&t), Err(TestlensError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_requires_execution_end() {
        let mut t = Table::new(vec!["tc_id".into(), "status".into()]);
        t.push_row(vec![Some("tc1".into()), Some("pass".into())]);
        let err = latest_status(&t).unwrap_err();
        assert!(matches!(err, TestlensError::MissingColumn(ref c) if c == "execution_end"));
    }
}
