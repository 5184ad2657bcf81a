//! # vecino-server
//!
//! REST API and realtime hub for the neighborhood platform, built with Axum.
//! A single process serves the HTTP endpoints, the `/ws` realtime channel,
//! and the health probe.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod realtime;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
