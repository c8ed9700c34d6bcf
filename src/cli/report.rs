use console::style;
use serde_json::json;
use crate::catalog::Catalog;
use crate::cli::commands::ReportArgs;
use crate::errors::TestlensError;
use crate::insights::InsightRequester;
use crate::reporting::{assemble_report, format_insights, format_report, InsightInput};
use tracing::info;

pub async fn handle_report(args: ReportArgs, config_path: Option<&str>) -> Result<(), TestlensError> {
    let config = super::resolve_config(config_path, &args.data).await?;

    // Resolve the credential before producing any output.
    let requester = if args.insights {
        Some(InsightRequester::from_config(&config.llm)?)
    } else {
        None
    };

    info!(project = %args.project, "Building report");
    let catalog = Catalog::new(&config.data);
    let report = assemble_report(&catalog, &args.project, config.data.on_error)?;

    let input = report.insight_input();
    let insights = match (&requester, input) {
        (Some(requester), InsightInput::Ready(data)) => Some(requester.generate(data).await),
        _ => None,
    };

    if args.json {
        let output = json!({ "report": report, "insights": insights });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", format_report(&report));
    if args.insights {
        if let Some(text) = insights {
            print!("\n{}", format_insights(&text));
        } else if let Some(notice) = super::insights::skip_notice(input) {
            println!("\n{}", style(notice).dim());
        }
    }
    Ok(())
}
