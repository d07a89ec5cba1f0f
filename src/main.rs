use campus_nav::{AppState, Cli, ServerConfig, ServerError, init_tracing, router};
use campus_nav_core::create_campus_model;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();
    let config = ServerConfig::load(&cli)?;
    init_tracing(&config.log_filter);

    let campus = create_campus_model(&config.campus_model_config())?;
    info!(
        "Loaded {} with {} buildings",
        campus.name(),
        campus.len()
    );
    let app = router(AppState::new(campus, &config), &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
}
