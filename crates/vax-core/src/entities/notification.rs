//! Notification entity - an entry in a user's notification feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::ReminderChannel;
use crate::value_objects::{NotificationId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub channel: ReminderChannel,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Create a new unread notification
    pub fn new(
        user_id: UserId,
        channel: ReminderChannel,
        title: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            user_id,
            channel,
            title: title.into(),
            message: message.into(),
            created_at,
            read: false,
        }
    }

    #[inline]
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
