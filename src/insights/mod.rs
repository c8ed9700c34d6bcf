pub mod stats;
pub mod prompt;
pub mod requester;

pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use requester::InsightRequester;
pub use stats::InsightStats;
