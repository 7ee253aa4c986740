pub mod error;
pub mod models;
pub mod modules;
pub mod proxy; // Proxy service module
pub mod utils;

use modules::logger;
use tracing::info;

use crate::error::AppResult;

/// Load config, start the proxy and serve until Ctrl-C
pub async fn run() -> AppResult<()> {
    // Keep the guard alive so the file log is flushed on exit
    let _log_guard = logger::init_logger();

    let config = modules::config::load_app_config()?;
    let (server, handle) = proxy::AxumServer::start(&config.proxy).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server.stop();
    if let Err(e) = handle.await {
        tracing::error!("Proxy server task failed: {}", e);
    }

    Ok(())
}
