//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (recovery boundary, tracing, timeout, body limit)
//! - Bind server to listener
//! - Drain connections on shutdown, bounded by a grace period

use std::future::IntoFuture;
use std::time::Duration;

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handlers;
use crate::http::middleware::recovery;

/// HTTP server owning the route registry and its middleware stack.
///
/// The router is built once from the validated config and never mutated
/// afterwards; serving only reads it.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// `/rejection` is the only explicit route; everything else falls back
    /// to the ping handler, which matches the catch-all registration the
    /// service has always exposed. Axum applies layers inside-out, so the
    /// recovery boundary is added last to sit outermost and cover panics
    /// raised in any inner layer as well as in the handlers.
    fn build_router(config: &ServerConfig) -> Router {
        let mut router = Router::new()
            .route("/rejection", any(handlers::rejection))
            .fallback(handlers::ping)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http());

        if config.recovery.enabled {
            router = router.layer(axum::middleware::from_fn(recovery::recover_request));
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after the shutdown signal fires and in-flight connections
    /// have drained, or after the configured grace period if draining
    /// takes longer.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            recovery_enabled = self.config.recovery.enabled,
            "HTTP server starting"
        );

        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);
        let mut drain_deadline = shutdown.resubscribe();

        let app = self.router.into_make_service();
        let server = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => result?,
            () = async {
                let _ = drain_deadline.recv().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(
                    grace_secs = grace.as_secs(),
                    "Drain deadline reached, closing remaining connections"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
