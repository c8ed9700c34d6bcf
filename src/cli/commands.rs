use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "testlens", version, about = "Aggregate per-build test execution reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects in the data directory
    Projects(ProjectsArgs),
    /// Aggregate a project's build files and print the summary views
    Report(ReportArgs),
    /// Ask the language model for commentary on a project
    Insights(InsightsArgs),
    /// Start the HTTP JSON API
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Overrides for the `data` config section.
#[derive(Args, Clone, Default)]
pub struct DataArgs {
    /// Directory with one subdirectory per project
    #[arg(long)]
    pub data_root: Option<String>,

    /// Skip build files that fail to load instead of aborting
    #[arg(long)]
    pub skip_bad_files: bool,
}

#[derive(Args, Clone)]
pub struct ProjectsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Project directory name
    pub project: String,

    #[command(flatten)]
    pub data: DataArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Append LLM-generated insights
    #[arg(long)]
    pub insights: bool,
}

#[derive(Args, Clone)]
pub struct InsightsArgs {
    /// Project directory name
    pub project: String,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
