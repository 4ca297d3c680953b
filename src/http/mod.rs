//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, graceful shutdown)
//!     → middleware/recovery.rs (outermost panic boundary)
//!     → [trace, timeout, body limit layers]
//!     → handlers.rs (demo endpoints)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::HttpServer;
