//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Install a process-level panic hook routing panics through tracing
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured filter
//! - The panic hook is a backstop for panics outside any request scope;
//!   request-scoped panics are additionally logged by the recovery layer

use std::panic;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
pub fn init(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Replace the default stderr panic output with a structured log line.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        tracing::error!(location = %location, "panic: {payload}");
    }));
}
