use crate::cli::commands::ServeArgs;
use crate::errors::TestlensError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, config_path: Option<&str>) -> Result<(), TestlensError> {
    let config = super::resolve_config(config_path, &args.data).await?;
    let state = api::create_app_state(&config)?;
    info!(
        host = %args.host,
        port = args.port,
        root = %config.data.root.display(),
        provider = state.insights.provider().provider_name(),
        model = state.insights.provider().model_name(),
        "Starting API server"
    );
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| TestlensError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
