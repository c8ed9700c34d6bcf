use crate::models::Status;
use super::stats::InsightStats;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for test management.";

pub fn build_prompt(stats: &InsightStats) -> String {
    let failures = stats.ranked_failures();
    let features = if failures.is_empty() {
        "none".to_string()
    } else {
        failures
            .iter()
            .map(|(feature, count)| format!("{}: {}", feature, count))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Generate a summary of the following test results:\n\
         - Total tests executed: {}\n\
         - Passed tests: {}\n\
         - Failed tests: {}\n\
         - Deprecated tests: {}\n\
         - Not Ready tests: {}\n\
         - Not Run tests: {}\n\
         - Features with failures: {}\n\
         Provide a concise summary of the test execution results, highlighting key areas of improvement.\n",
        stats.total,
        stats.count(Status::Pass),
        stats.count(Status::Fail),
        stats.count(Status::Deprecated),
        stats.count(Status::NotReady),
        stats.count(Status::NotRun),
        features,
    )
}
