//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{
    auth, community, feedback, health, notifications, simulations, users, vaccinations, vaccines,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(vaccination_routes())
        .merge(notification_routes())
        .merge(public_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Profile and reminder preferences
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route(
            "/users/@me/reminder-settings",
            get(users::get_reminder_settings).put(users::update_reminder_settings),
        )
}

/// Dose records and the due-dose schedule
fn vaccination_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me/vaccinations",
            get(vaccinations::get_record).put(vaccinations::import_record),
        )
        .route(
            "/users/@me/vaccinations/:vaccine_id/doses/:index",
            put(vaccinations::check_dose).delete(vaccinations::uncheck_dose),
        )
        .route("/users/@me/upcoming-doses", get(vaccinations::upcoming_doses))
}

/// Notification feed
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me/notifications",
            get(notifications::list_notifications),
        )
        .route(
            "/users/@me/notifications/stream",
            get(notifications::stream_notifications),
        )
        .route(
            "/users/@me/notifications/:notification_id/read",
            patch(notifications::mark_read),
        )
}

/// Routes that need no login
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/vaccines", get(vaccines::list_vaccines))
        .route("/vaccines/:vaccine_id", get(vaccines::get_vaccine))
        .route("/stats/coverage", get(community::coverage))
        .route("/community/articles", get(community::articles))
        .route("/simulations/risk", post(simulations::run_risk_simulation))
        .route("/feedback", post(feedback::submit_feedback))
}
