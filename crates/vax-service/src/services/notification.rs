//! Notification feed service

use tracing::{info, instrument, warn};
use vax_core::events::NotificationReadEvent;
use vax_core::{DomainError, DomainEvent, NotificationId, UserId};

use crate::dto::NotificationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub const DEFAULT_FEED_LIMIT: i64 = 50;
pub const MAX_FEED_LIMIT: i64 = 100;

pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: UserId,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let limit = limit.unwrap_or(DEFAULT_FEED_LIMIT).clamp(1, MAX_FEED_LIMIT);
        let notifications = self
            .ctx
            .notification_repo()
            .list_for_user(user_id, limit)
            .await?;
        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }

    /// Mark one of the user's notifications as read
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        user_id: UserId,
        notification_id: NotificationId,
    ) -> ServiceResult<NotificationResponse> {
        let mut notification = self
            .ctx
            .notification_repo()
            .find_by_id(notification_id)
            .await?
            .ok_or(DomainError::NotificationNotFound(notification_id))?;

        if notification.user_id != user_id {
            return Err(DomainError::NotNotificationOwner.into());
        }

        if notification.is_unread() {
            self.ctx.notification_repo().mark_read(notification_id).await?;
            notification.read = true;
            info!(user_id = %user_id, notification_id = %notification_id, "Notification read");

            let event =
                DomainEvent::NotificationRead(NotificationReadEvent::new(notification_id, user_id));
            if let Err(e) = self.ctx.event_publisher().publish(&event).await {
                warn!(error = %e, "Failed to publish read receipt");
            }
        }

        Ok(NotificationResponse::from(notification))
    }
}
