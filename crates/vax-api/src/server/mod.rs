//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};
use vax_cache::{
    Publisher, RedisPool, RedisReminderMarkerStore, RefreshTokenStore, Subscriber,
    SubscriberConfig,
};
use vax_common::{AppConfig, AppError, JwtService};
use vax_db::{
    create_pool, run_migrations, DatabaseConfig, PgFeedbackRepository, PgNotificationRepository,
    PgUserRepository, PgVaccinationRepository,
};
use vax_service::ServiceContextBuilder;

use crate::clients::HttpRecommendationService;
use crate::middleware::{apply_api_layers, apply_common_layers, MiddlewareSettings};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes skip rate limiting and compression.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let settings = MiddlewareSettings {
        rate_limit: &config.rate_limit,
        cors: &config.cors,
        request_timeout: config.api.request_timeout(),
        is_production: config.app.env.is_production(),
    };

    let api = apply_api_layers(create_router(), settings.rate_limit)?;
    let router = apply_common_layers(api.merge(health_routes()), settings);
    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    redis_pool
        .health_check()
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Refresh sessions live exactly as long as the refresh token itself
    let session_ttl = u64::try_from(config.jwt.refresh_token_expiry).unwrap_or_default();

    let mut builder = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .vaccination_repo(Arc::new(PgVaccinationRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool.clone())))
        .feedback_repo(Arc::new(PgFeedbackRepository::new(pool.clone())))
        .session_store(Arc::new(RefreshTokenStore::with_ttl(
            redis_pool.clone(),
            session_ttl,
        )))
        .reminder_markers(Arc::new(RedisReminderMarkerStore::new(
            redis_pool.clone(),
            config.reminder.marker_ttl_secs(),
        )))
        .event_publisher(Arc::new(Publisher::new(redis_pool.clone())))
        .jwt_service(jwt_service);

    match &config.recommendation.url {
        Some(url) => {
            let client = HttpRecommendationService::new(url.clone(), config.recommendation.timeout())
                .map_err(AppError::Domain)?;
            info!(url = %client.url(), "Recommendation service configured");
            builder = builder.recommendation(Arc::new(client));
        }
        None => warn!("RECOMMENDATION_URL not set; risk simulations will fail"),
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let subscriber = Subscriber::start(SubscriberConfig {
        redis_url: redis_pool.url().to_string(),
        ..Default::default()
    });

    Ok(AppState::new(
        service_context,
        config,
        pool,
        redis_pool,
        subscriber,
    ))
}

/// Run the HTTP server until ctrl-c or SIGTERM
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {}", e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state.clone())?;

    let result = run_server(app, addr).await;

    if let Err(e) = state.subscriber().shutdown().await {
        warn!(error = %e, "Subscriber already stopped");
    }
    info!("Server stopped");
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
