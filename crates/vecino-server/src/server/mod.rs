//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;
use vecino_common::{AppConfig, AppError, JwtService};
use vecino_core::entities::ChatRoom;
use vecino_db::{
    create_pool, PgAttendeeRepository, PgEventRepository, PgListingRepository,
    PgMessageRepository, PgRoomRepository, PgUserRepository,
};
use vecino_service::{ServiceContext, ServiceContextBuilder};

use crate::middleware::apply_middleware;
use crate::realtime::RealtimeHub;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Rooms seeded on first run, so a fresh neighborhood is not empty
const DEFAULT_ROOMS: [(&str, &str); 4] = [
    ("Junta de Vecinos", "👥"),
    ("Seguridad UV4", "🛡️"),
    ("Grupo Jardinería", "🌱"),
    ("Mercado Comunitario", "🛒"),
];

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    // Health probes bypass the rate limiter
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = vecino_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply schema migrations
    vecino_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let room_repo = Arc::new(PgRoomRepository::new(pool.clone()));
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let event_repo = Arc::new(PgEventRepository::new(pool.clone()));
    let attendee_repo = Arc::new(PgAttendeeRepository::new(pool.clone()));
    let listing_repo = Arc::new(PgListingRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .room_repo(room_repo)
        .message_repo(message_repo)
        .event_repo(event_repo)
        .attendee_repo(attendee_repo)
        .listing_repo(listing_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Seed the default rooms on first run
    seed_default_rooms(&service_context).await?;

    // Create the realtime hub
    let hub = RealtimeHub::new_shared();

    Ok(AppState::new(service_context, hub, pool, config))
}

/// Insert the default neighborhood rooms when the rooms table is empty
async fn seed_default_rooms(ctx: &ServiceContext) -> Result<(), AppError> {
    let existing = ctx.room_repo().count().await?;
    if existing > 0 {
        return Ok(());
    }

    info!("Seeding default chat rooms...");
    for (name, avatar) in DEFAULT_ROOMS {
        let room = ChatRoom::new(Uuid::new_v4(), name.to_string(), Some(avatar.to_string()));
        ctx.room_repo().create(&room).await?;
    }
    info!(count = DEFAULT_ROOMS.len(), "Default chat rooms created");

    Ok(())
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
