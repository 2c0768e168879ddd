//! HTTP server module

pub mod api;

pub use api::{build_router, run_server, AppState};
