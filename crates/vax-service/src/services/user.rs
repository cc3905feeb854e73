//! User service
//!
//! Profile and reminder preference management for the current user.

use tracing::{info, instrument};
use vax_core::entities::{ReminderChannel, User};
use vax_core::{DomainError, UserId};

use crate::dto::{
    CurrentUserResponse, ReminderSettingsRequest, ReminderSettingsResponse, UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: UserId) -> ServiceResult<CurrentUserResponse> {
        let user = self.load(user_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Update editable profile fields. The email is never changed.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self.load(user_id).await?;

        let age = request
            .age
            .map(u32::try_from)
            .transpose()
            .map_err(|_| ServiceError::validation("Age cannot be negative."))?;
        let address = request
            .address
            .map(|a| a.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()));

        user.update_profile(
            request.username.map(|u| u.trim().to_string()),
            age,
            request.gender,
            address,
        );

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Get reminder preferences
    #[instrument(skip(self))]
    pub async fn get_reminder_settings(
        &self,
        user_id: UserId,
    ) -> ServiceResult<ReminderSettingsResponse> {
        let user = self.load(user_id).await?;
        Ok(ReminderSettingsResponse::from(&user))
    }

    /// Update reminder preferences
    ///
    /// Email reminders need an address; push reminders fall back to the
    /// account email.
    #[instrument(skip(self, request), fields(reminder_type = request.reminder_type.as_str()))]
    pub async fn update_reminder_settings(
        &self,
        user_id: UserId,
        request: ReminderSettingsRequest,
    ) -> ServiceResult<ReminderSettingsResponse> {
        let email = request
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        if request.reminder_type == ReminderChannel::Email && email.is_none() {
            return Err(ServiceError::validation(
                "An email address is required for email reminders.",
            ));
        }

        let mut user = self.load(user_id).await?;
        user.set_reminder_preferences(request.reminder_type, email);
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Reminder settings saved");
        Ok(ReminderSettingsResponse::from(&user))
    }

    async fn load(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }
}
