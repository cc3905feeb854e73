//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are serialized as strings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use vax_core::entities::{AgeGroupCoverage, Article, Gender, ReminderChannel};

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user's profile
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub reminder_type: ReminderChannel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reminder preferences
#[derive(Debug, Clone, Serialize)]
pub struct ReminderSettingsResponse {
    pub reminder_type: ReminderChannel,
    /// Address reminder emails go to
    pub email: String,
}

// ============================================================================
// Vaccination Responses
// ============================================================================

/// Catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct VaccineResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub diseases: &'static [&'static str],
    pub doses: u32,
    pub age: &'static str,
    pub dose_interval: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_interval_days: Option<u32>,
}

/// Dose history of one vaccine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserVaccinationResponse {
    pub taken: u32,
    pub doses: BTreeMap<u32, DateTime<Utc>>,
}

/// Whole record keyed by vaccine id
pub type VaccinationRecordResponse = BTreeMap<String, UserVaccinationResponse>;

/// Next due dose of an in-progress regimen
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingDoseResponse {
    pub vaccine_id: &'static str,
    pub vaccine_name: &'static str,
    pub dose_number: u32,
    pub due_date: DateTime<Utc>,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub channel: ReminderChannel,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Simulation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub should_remind: bool,
    pub reason: String,
}

/// Risk model output plus the recommendation derived from it
#[derive(Debug, Clone, Serialize)]
pub struct RiskSimulationResponse {
    pub reproduction_number: f64,
    pub projected_cases: u64,
    pub initial_infected: u64,
    pub narrative: String,
    pub recommendation: RecommendationResponse,
}

// ============================================================================
// Community Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct OverallCoverageResponse {
    pub rate: u32,
    pub population: u64,
    pub vaccinated: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageResponse {
    pub overall: OverallCoverageResponse,
    pub age_groups: &'static [AgeGroupCoverage],
}

pub type ArticleResponse = Article;

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
