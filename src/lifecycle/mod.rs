//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT/SIGQUIT/SIGHUP → trigger shutdown broadcast
//!
//! Shutdown (shutdown.rs):
//!     broadcast fires → server stops accepting → drain → exit
//! ```
//!
//! # Design Decisions
//! - One broadcast channel; every long-running task subscribes
//! - Drain is bounded: forced exit after the configured grace period

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
