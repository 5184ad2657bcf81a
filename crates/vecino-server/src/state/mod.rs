//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the realtime hub, the database pool, and configuration.

use std::sync::Arc;

use vecino_common::{AppConfig, JwtService};
use vecino_db::PgPool;
use vecino_service::ServiceContext;

use crate::realtime::RealtimeHub;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Realtime hub holding the ephemeral connection registry
    hub: Arc<RealtimeHub>,
    /// Database pool (kept for health probes)
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        hub: Arc<RealtimeHub>,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            hub,
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the realtime hub
    pub fn hub(&self) -> &RealtimeHub {
        &self.hub
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("hub", &self.hub)
            .field("config", &"AppConfig")
            .finish()
    }
}
