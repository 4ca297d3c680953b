//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use ping_guard::config::ServerConfig;
use ping_guard::http::HttpServer;
use ping_guard::lifecycle::Shutdown;

/// Start a server on `addr` with the given config and wait until it accepts
/// connections. Returns the shutdown handle; trigger it to stop the server.
pub async fn start_server(addr: SocketAddr, mut config: ServerConfig) -> Shutdown {
    config.listener.bind_address = addr.to_string();
    // Short drain so a failing test does not hold the port
    config.shutdown.grace_period_secs = 1;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    wait_until_ready(addr).await;
    shutdown
}

/// Poll until the server accepts TCP connections.
pub async fn wait_until_ready(addr: SocketAddr) {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {addr} did not become ready");
}

/// Build a client that bypasses any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
