//! Route definitions
//!
//! REST routes mounted under /api, the realtime endpoint at /ws, and the
//! health probes at /health.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, events, health, listings, rooms};
use crate::realtime::ws_handler;
use crate::state::AppState;

/// Create the main router with all routes (excluding health, which is
/// exported separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws", get(ws_handler))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(chat_routes())
        .merge(event_routes())
        .merge(service_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Chat routes (all require auth)
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/rooms", get(rooms::list_rooms))
        .route("/chat/rooms", post(rooms::create_room))
        .route("/chat/rooms/:room_id/messages", get(rooms::get_messages))
        .route("/chat/rooms/:room_id/messages", post(rooms::post_message))
}

/// Event routes (browsing is public, writes require auth)
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events", post(events::create_event))
        .route("/events/:event_id", get(events::get_event))
        .route("/events/:event_id/attendees", get(events::get_attendees))
        .route("/events/:event_id/attend", post(events::attend))
        .route("/events/:event_id/attend", delete(events::unattend))
}

/// Service directory routes (browsing is public, writes require auth)
fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(listings::list_services))
        .route("/services", post(listings::create_service))
        .route("/services/:listing_id", get(listings::get_service))
}
