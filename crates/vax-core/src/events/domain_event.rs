//! Domain events - events emitted when a user's data changes
//!
//! Published to the user's live channel so open notification streams can
//! update without polling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Notification;
use crate::value_objects::{NotificationId, UserId};

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    NotificationCreated(NotificationCreatedEvent),
    NotificationRead(NotificationReadEvent),
    VaccinationUpdated(VaccinationUpdatedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::NotificationCreated(_) => "NOTIFICATION_CREATED",
            Self::NotificationRead(_) => "NOTIFICATION_READ",
            Self::VaccinationUpdated(_) => "VACCINATION_UPDATED",
        }
    }

    /// User whose live channel receives the event
    pub fn user_id(&self) -> UserId {
        match self {
            Self::NotificationCreated(e) => e.notification.user_id,
            Self::NotificationRead(e) => e.user_id,
            Self::VaccinationUpdated(e) => e.user_id,
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::NotificationCreated(e) => e.timestamp,
            Self::NotificationRead(e) => e.timestamp,
            Self::VaccinationUpdated(e) => e.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreatedEvent {
    pub notification: Notification,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationReadEvent {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccinationUpdatedEvent {
    pub user_id: UserId,
    pub vaccine_id: String,
    /// Doses taken after the change
    pub taken: u32,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Event Creation Helpers
// ============================================================================

impl NotificationCreatedEvent {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            timestamp: Utc::now(),
        }
    }
}

impl NotificationReadEvent {
    pub fn new(notification_id: NotificationId, user_id: UserId) -> Self {
        Self {
            notification_id,
            user_id,
            timestamp: Utc::now(),
        }
    }
}

impl VaccinationUpdatedEvent {
    pub fn new(user_id: UserId, vaccine_id: impl Into<String>, taken: u32) -> Self {
        Self {
            user_id,
            vaccine_id: vaccine_id.into(),
            taken,
            timestamp: Utc::now(),
        }
    }
}
