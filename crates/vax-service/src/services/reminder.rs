//! Reminder dedup gate
//!
//! Turns qualifying upcoming doses into at most one notification per
//! (user, vaccine, dose, threshold). Every failure is logged and swallowed so
//! the schedule that triggered the gate still renders.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument, warn};
use vax_core::entities::ReminderChannel;
use vax_core::events::NotificationCreatedEvent;
use vax_core::{DomainEvent, ReminderCandidate, UpcomingDose, UserId};

use super::context::ServiceContext;

pub struct ReminderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReminderService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the gate over `doses` in order. Returns how many notifications
    /// were created.
    #[instrument(skip(self, doses, now), fields(doses = doses.len()))]
    pub async fn process(
        &self,
        user_id: UserId,
        channel: ReminderChannel,
        doses: &[UpcomingDose],
        now: DateTime<Utc>,
    ) -> u32 {
        let mut created = 0;
        for dose in doses {
            let Some(candidate) = ReminderCandidate::evaluate(user_id, dose, now) else {
                continue;
            };
            if self.emit(user_id, channel, candidate, now).await {
                created += 1;
            }
        }
        created
    }

    async fn emit(
        &self,
        user_id: UserId,
        channel: ReminderChannel,
        candidate: ReminderCandidate,
        now: DateTime<Utc>,
    ) -> bool {
        let key = candidate.key.clone();
        let markers = self.ctx.reminder_markers();

        match markers.is_marked(&key).await {
            Ok(true) => {
                debug!(key = %key, "Reminder already emitted");
                return false;
            }
            Ok(false) => {}
            Err(e) => {
                error!(key = %key, error = %e, "Failed to read reminder marker");
                return false;
            }
        }

        let notification = candidate.into_notification(user_id, channel, now);
        let created = match self
            .ctx
            .notification_repo()
            .create_reminder(&notification, &key)
            .await
        {
            Ok(created) => created,
            Err(e) => {
                // no marker, so the next evaluation retries
                error!(key = %key, error = %e, "Failed to create reminder notification");
                return false;
            }
        };

        if created {
            info!(user_id = %user_id, key = %key, "Reminder notification created");
            let event = DomainEvent::NotificationCreated(NotificationCreatedEvent::new(notification));
            if let Err(e) = self.ctx.event_publisher().publish(&event).await {
                warn!(key = %key, error = %e, "Failed to publish reminder");
            }
        } else {
            debug!(key = %key, "Reminder notification already stored");
        }

        if let Err(e) = markers.mark(&key).await {
            error!(key = %key, error = %e, "Failed to set reminder marker");
        }
        created
    }
}
