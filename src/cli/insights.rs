use crate::catalog::Catalog;
use crate::cli::commands::InsightsArgs;
use crate::errors::TestlensError;
use crate::insights::InsightRequester;
use crate::reporting::{assemble_report, format_report, InsightInput, NO_STATUS_COLUMN};
use tracing::debug;

pub const NO_INSIGHT_DATA: &str = "No data available for insights.";

/// Line printed in place of insights when the report gives them nothing to
/// work on. `None` for a missing project, whose report already says so.
pub fn skip_notice(input: InsightInput<'_>) -> Option<&'static str> {
    match input {
        InsightInput::NoFiles | InsightInput::Ready(_) => None,
        InsightInput::NoData => Some(NO_INSIGHT_DATA),
        InsightInput::NoStatusColumn => Some(NO_STATUS_COLUMN),
    }
}

pub async fn handle_insights(args: InsightsArgs, config_path: Option<&str>) -> Result<(), TestlensError> {
    let config = super::resolve_config(config_path, &args.data).await?;
    let requester = InsightRequester::from_config(&config.llm)?;

    let catalog = Catalog::new(&config.data);
    let report = assemble_report(&catalog, &args.project, config.data.on_error)?;

    let input = report.insight_input();
    match input {
        InsightInput::Ready(data) => println!("{}", requester.generate(data).await.trim_end()),
        InsightInput::NoFiles => print!("{}", format_report(&report)),
        skipped => {
            debug!(project = %args.project, state = ?skipped, "Skipping insights");
            if let Some(notice) = skip_notice(skipped) {
                println!("{}", notice);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Table;

    #[test]
    fn test_skip_notice_without_status_column() {
        assert_eq!(skip_notice(InsightInput::NoStatusColumn), Some("No 'status' column found for aggregation."));
    }

    #[test]
    fn test_skip_notice_other_states() {
        let table = Table::default();
        assert_eq!(skip_notice(InsightInput::NoData), Some(NO_INSIGHT_DATA));
        assert_eq!(skip_notice(InsightInput::NoFiles), None);
        assert_eq!(skip_notice(InsightInput::Ready(&table)), None);
    }
}
