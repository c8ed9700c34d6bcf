pub mod assembler;
pub mod formatter;

pub use assembler::{assemble_report, InsightInput, LoadedReport, ProjectReport};
pub use formatter::{format_insights, format_report, NO_STATUS_COLUMN};
