use console::style;
use crate::catalog::Catalog;
use crate::cli::commands::ProjectsArgs;
use crate::errors::TestlensError;
use tracing::info;

pub async fn handle_projects(args: ProjectsArgs, config_path: Option<&str>) -> Result<(), TestlensError> {
    let config = super::resolve_config(config_path, &args.data).await?;
    let catalog = Catalog::new(&config.data);
    let projects = catalog.projects();
    info!(root = %catalog.root().display(), count = projects.len(), "Listed projects");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "projects": projects }))?);
        return Ok(());
    }

    if projects.is_empty() {
        eprintln!("{} No projects found in the data folder.", style("warning:").yellow().bold());
        return Ok(());
    }
    for project in projects {
        println!("{}", project);
    }
    Ok(())
}
