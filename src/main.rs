use std::path::Path;

use tokio::net::TcpListener;

use ping_guard::config::loader;
use ping_guard::http::HttpServer;
use ping_guard::lifecycle::{signals, Shutdown};
use ping_guard::observability::logging;

/// Optional configuration file, looked up relative to the working directory.
/// A missing file means built-in defaults (port 3000, recovery enabled).
const CONFIG_PATH: &str = "ping-guard.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = loader::load_or_default(Path::new(CONFIG_PATH))?;

    logging::init(&config.observability);
    logging::install_panic_hook();

    tracing::info!("ping-guard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        recovery_enabled = config.recovery.enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Translate OS signals into the shutdown broadcast
    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
