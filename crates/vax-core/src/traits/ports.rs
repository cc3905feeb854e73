//! Ports for infrastructure that is not a database table
//!
//! Idempotency markers, session storage, live event delivery and the
//! external recommendation step.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::DomainEvent;
use crate::traits::RepoResult;
use crate::value_objects::UserId;

// ============================================================================
// Reminder Markers
// ============================================================================

/// Shared store of reminder idempotency markers
#[async_trait]
pub trait ReminderMarkerStore: Send + Sync {
    /// Whether the reminder behind `key` was already emitted
    async fn is_marked(&self, key: &str) -> RepoResult<bool>;

    /// Set the marker. Returns `false` if it was already present.
    async fn mark(&self, key: &str) -> RepoResult<bool>;
}

// ============================================================================
// Sessions
// ============================================================================

/// Refresh-token sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Remember `refresh_token` as belonging to `user_id`
    async fn store(&self, refresh_token: &str, user_id: UserId) -> RepoResult<()>;

    /// Owner of a still-valid refresh token
    async fn validate(&self, refresh_token: &str) -> RepoResult<Option<UserId>>;

    /// Revoke one refresh token
    async fn revoke(&self, refresh_token: &str) -> RepoResult<bool>;

    /// Revoke every refresh token of a user, returning how many were removed
    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<u32>;
}

// ============================================================================
// Live Events
// ============================================================================

#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish to the live channel of `event.user_id()`
    async fn publish(&self, event: &DomainEvent) -> RepoResult<()>;
}

// ============================================================================
// Recommendation Service
// ============================================================================

/// Input to the external recommendation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub simulation_narrative: String,
    /// Community vaccination rate as a 0-1 fraction
    pub vaccination_rate: f64,
    pub age_group: String,
}

/// Verdict returned by the recommendation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub should_remind: bool,
    pub reason: String,
}

/// Opaque text-generation step that turns a simulation into advice
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, request: &RecommendationRequest)
        -> Result<Recommendation, DomainError>;
}
