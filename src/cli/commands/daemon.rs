//! Daemon command handler: runs the favourites API server.

use tracing::{error, info};

use crate::api;
use crate::config::Config;

pub async fn cmd_daemon(config: Config) -> anyhow::Result<()> {
    if !config.server.enabled {
        anyhow::bail!("Server is disabled in config");
    }

    info!(
        "Pawdex v{} starting in daemon mode...",
        env!("CARGO_PKG_VERSION")
    );

    let port = config.server.port;
    let state = api::create_app_state(config).await?;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("Favourites API running at http://{}", addr);
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    info!("Daemon running. Press Ctrl+C to stop.");

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }

    server_handle.abort();
    info!("Daemon stopped");

    Ok(())
}
