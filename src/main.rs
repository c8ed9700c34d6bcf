use clap::Parser;
use testlens::{cli, config, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().with_current_span(false).init();
    } else {
        subscriber.with_target(false).with_ansi(!cli.no_color).init();
    }

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        cli::Commands::Projects(args) => cli::projects::handle_projects(args, config_path).await,
        cli::Commands::Report(args) => cli::report::handle_report(args, config_path).await,
        cli::Commands::Insights(args) => cli::insights::handle_insights(args, config_path).await,
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, config_path).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.classify().exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::TestlensError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
