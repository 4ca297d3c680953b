//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Process-level:
//!     panic hook routes escaped panics through the same log stream
//! ```

pub mod logging;
