//! Notification entity <-> model mapper

use vax_core::entities::{Notification, ReminderChannel};
use vax_core::error::DomainError;
use vax_core::value_objects::{NotificationId, UserId};

use crate::models::NotificationModel;

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let channel = ReminderChannel::parse(&model.channel).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "Unknown channel in notifications row: {}",
                model.channel
            ))
        })?;

        Ok(Notification {
            id: NotificationId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            channel,
            title: model.title,
            message: model.message,
            created_at: model.created_at,
            read: model.read,
        })
    }
}
