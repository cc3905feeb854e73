//! Upcoming-dose schedule
//!
//! Projects the next due dose of every regimen in progress and runs the
//! reminder gate over the result.

use chrono::{DateTime, Utc};
use tracing::{error, instrument};
use vax_core::entities::{ReminderChannel, VaccinationRecord};
use vax_core::{project_upcoming_doses, UserId};

use crate::dto::UpcomingDoseResponse;

use super::context::ServiceContext;
use super::reminder::ReminderService;
use super::error::ServiceResult;

pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upcoming doses sorted by due date
    ///
    /// Read failures degrade to an empty record or default preferences so
    /// the schedule always renders.
    #[instrument(skip(self, now))]
    pub async fn upcoming_doses(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<UpcomingDoseResponse>> {
        let (user, record) = tokio::join!(
            self.ctx.user_repo().find_by_id(user_id),
            self.ctx.vaccination_repo().get_record(user_id),
        );

        let channel = match user {
            Ok(Some(user)) => user.reminder_type,
            Ok(None) => ReminderChannel::default(),
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to load reminder preference");
                ReminderChannel::default()
            }
        };
        let record = record.unwrap_or_else(|e| {
            error!(user_id = %user_id, error = %e, "Failed to load vaccination record");
            VaccinationRecord::new()
        });

        let upcoming = project_upcoming_doses(self.ctx.catalog(), &record);

        ReminderService::new(self.ctx)
            .process(user_id, channel, &upcoming, now)
            .await;

        Ok(upcoming.into_iter().map(UpcomingDoseResponse::from).collect())
    }
}
