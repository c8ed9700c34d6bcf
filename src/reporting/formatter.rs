use console::{style, Color};
use crate::models::{Status, Table};
use crate::summary::{LatestStatus, StatusCount, StatusPivot, Summary, SummaryOutcome};
use super::assembler::{LoadedReport, ProjectReport};

const BAR_WIDTH: usize = 30;
const DATA_PREVIEW_ROWS: usize = 20;

pub const NO_STATUS_COLUMN: &str = "No 'status' column found for aggregation.";

fn status_style(status: &str) -> Option<Color> {
    Status::parse(status).map(|s| Color::Color256(s.ansi256()))
}

/// Pad first, then color, so ANSI codes do not break alignment.
fn paint_status(status: &str, width: usize) -> String {
    let padded = format!("{:<width$}", status, width = width);
    match status_style(status) {
        Some(color) => style(padded).fg(color).to_string(),
        None => padded,
    }
}

fn markdown_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    out.push_str(&format!("|{}|\n", vec!["---"; headers.len()].join("|")));
    for row in rows {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out
}

pub fn format_pivot(pivot: &StatusPivot) -> String {
    let mut headers = vec!["Build ID".to_string()];
    headers.extend(pivot.statuses.iter().cloned());

    let rows: Vec<Vec<String>> = pivot
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.build_id.clone()];
            cells.extend(pivot.statuses.iter().map(|s| row.counts.get(s).copied().unwrap_or(0).to_string()));
            cells
        })
        .collect();
    markdown_table(&headers, &rows)
}

pub fn format_latest(latest: &[LatestStatus]) -> String {
    let headers = ["tc_id", "status", "execution_end"].map(String::from);
    let rows: Vec<Vec<String>> = latest
        .iter()
        .map(|row| {
            vec![
                row.tc_id.clone().unwrap_or_default(),
                row.status.clone().unwrap_or_default(),
                row.execution_end.map(|t| t.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    markdown_table(&headers, &rows)
}

/// Proportions as horizontal bars.
pub fn format_distribution(distribution: &[StatusCount]) -> String {
    let total: usize = distribution.iter().map(|c| c.count).sum();
    if total == 0 {
        return "No statuses to chart.\n".to_string();
    }
    let label_width = distribution.iter().map(|c| c.status.len()).max().unwrap_or(0);

    let mut out = String::new();
    for entry in distribution {
        let share = entry.count as f64 / total as f64;
        let bar = "█".repeat((share * BAR_WIDTH as f64).round() as usize);
        out.push_str(&format!(
            "  {} {:>5.1}% ({}) {}\n",
            paint_status(&entry.status, label_width),
            share * 100.0,
            entry.count,
            bar,
        ));
    }
    out
}

/// First rows of the aggregated table.
pub fn format_data_preview(table: &Table, limit: usize) -> String {
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .take(limit)
        .map(|row| row.iter().map(|c| c.clone().unwrap_or_default()).collect())
        .collect();
    let mut out = markdown_table(table.columns(), &rows);
    if table.len() > limit {
        out.push_str(&format!("… {} more rows\n", table.len() - limit));
    }
    out
}

fn format_summary(summary: &Summary) -> String {
    format!(
        "## Aggregated Test Status by Build ID\n\n{}\n## Latest Test Status per Test Case (tc_id)\n\n{}\n## Test Status Distribution\n\n{}",
        format_pivot(&summary.pivot),
        format_latest(&summary.latest),
        format_distribution(&summary.distribution),
    )
}

fn format_loaded(report: &LoadedReport) -> String {
    let mut out = format!("# Test Execution Report: {}\n\n", report.project);
    out.push_str(&format!(
        "Loaded {} file(s), {} row(s).\n",
        report.files.len(),
        report.data.len()
    ));
    for skipped in &report.skipped {
        out.push_str(&format!("{} skipped {}: {}\n", style("!").yellow(), skipped.file, skipped.error));
    }
    out.push('\n');

    match &report.summary {
        SummaryOutcome::NoStatusColumn => {
            out.push_str(NO_STATUS_COLUMN);
            out.push_str("\n\n");
        }
        SummaryOutcome::Ready(summary) => {
            out.push_str(&format_summary(summary));
            out.push('\n');
        }
    }

    out.push_str(&format!("## Aggregated Data for {}\n\n", report.project));
    out.push_str(&format_data_preview(&report.data, DATA_PREVIEW_ROWS));
    out
}

pub fn format_report(report: &ProjectReport) -> String {
    match report {
        ProjectReport::NoFiles { project } => format!(
            "{} No CSV files found in {}.\n",
            style("warning:").yellow().bold(),
            project
        ),
        ProjectReport::Loaded(loaded) => format_loaded(loaded),
    }
}

pub fn format_insights(text: &str) -> String {
    format!("## Automated Test Insights\n\n{}\n", text.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use crate::summary::PivotRow;

    #[test]
    fn test_status_style_uses_status_palette() {
        assert_eq!(status_style("deprecated"), Some(Color::Color256(Status::Deprecated.ansi256())));
        assert_eq!(status_style("not ready"), Some(Color::Color256(220)));
        assert_eq!(status_style("blocked"), None);
    }

    #[test]
    fn test_format_pivot() {
        let pivot = StatusPivot {
            statuses: vec!["fail".into(), "pass".into()],
            rows: vec![PivotRow {
                build_id: "101".into(),
                counts: BTreeMap::from([("fail".into(), 1), ("pass".into(), 3)]),
            }],
        };
        let out = format_pivot(&pivot);
        assert!(out.starts_with("| Build ID | fail | pass |\n|---|---|---|\n"));
        assert!(out.contains("| 101 | 1 | 3 |"));
    }

    #[test]
    fn test_format_distribution_percentages() {
        let dist = vec![
            StatusCount { status: "pass".into(), count: 3, color: None },
            StatusCount { status: "blocked".into(), count: 1, color: None },
        ];
        let out = format_distribution(&dist);
        assert!(out.contains("75.0% (3)"));
        assert!(out.contains("25.0% (1)"));
        assert!(out.contains("blocked"));
    }

    #[test]
    fn test_format_distribution_empty() {
        assert_eq!(format_distribution(&[]), "No statuses to chart.\n");
    }

    #[test]
    fn test_data_preview_truncates() {
        let mut table = Table::new(vec!["tc_id".into()]);
        for i in 0..5 {
            table.push_row(vec![Some(format!("tc{i}"))]);
        }
        let out = format_data_preview(&table, 2);
        assert!(out.contains("| tc1 |"));
        assert!(!out.contains("| tc2 |"));
        assert!(out.contains("3 more rows"));
    }

    #[test]
    fn test_no_files_message() {
        let out = format_report(&ProjectReport::NoFiles { project: "web".into() });
        assert!(out.contains("No CSV files found in web."));
    }
}
