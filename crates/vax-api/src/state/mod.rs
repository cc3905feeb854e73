//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the raw pools used by readiness checks, and the pub/sub subscriber that
//! feeds live notification streams.

use std::sync::Arc;

use vax_cache::{RedisPool, Subscriber};
use vax_common::{AppConfig, JwtService};
use vax_db::PgPool;
use vax_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    db_pool: PgPool,
    redis_pool: RedisPool,
    subscriber: Arc<Subscriber>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        db_pool: PgPool,
        redis_pool: RedisPool,
        subscriber: Subscriber,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            db_pool,
            redis_pool,
            subscriber: Arc::new(subscriber),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    /// Source of live events for notification streams
    pub fn subscriber(&self) -> &Subscriber {
        &self.subscriber
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish()
    }
}
