//! Middleware layers applied around the router.

pub mod recovery;
