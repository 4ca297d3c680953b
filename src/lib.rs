//! ping-guard: a small HTTP service with request-scoped fault recovery.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 PING-GUARD                   │
//!                    │                                              │
//!   Client Request   │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│ recovery │──▶│  router  │──▶│ handlers │  │
//!                    │  │ boundary │   │          │   │          │  │
//!   Client Response  │  └────┬─────┘   └──────────┘   └────┬─────┘  │
//!   ◀────────────────┼───────┘              ▲              │        │
//!                    │       ▲              └───── panic ──┘        │
//!                    │       └── fallback body on caught panic      │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │         Cross-Cutting Concerns         │  │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │  │
//!                    │  │  │ config │ │ observa-  │ │lifecycle│  │  │
//!                    │  │  │        │ │ bility    │ │         │  │  │
//!                    │  │  └────────┘ └───────────┘ └─────────┘  │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The recovery boundary is the outermost middleware layer. A panic anywhere
//! below it resolves the request with a fixed fallback body and an error log
//! line instead of killing the connection task.

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
