//! Contact-form feedback

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use vax_core::entities::{cooldown_window_start, FeedbackSubmission};
use vax_core::DomainError;

use crate::dto::{FeedbackRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub const FEEDBACK_THANKS: &str = "Thank you for your feedback!";

pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a submission unless `ip_address` sent one in the last 24 hours
    #[instrument(skip(self, request), fields(ip = %ip_address))]
    pub async fn submit(
        &self,
        ip_address: &str,
        request: FeedbackRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<MessageResponse> {
        let repo = self.ctx.feedback_repo();
        if repo
            .has_submission_since(ip_address, cooldown_window_start(now))
            .await?
        {
            return Err(DomainError::FeedbackRateLimited.into());
        }

        let submission = FeedbackSubmission::new(
            ip_address.to_string(),
            request.name.trim().to_string(),
            request.email.trim().to_string(),
            request.message.trim().to_string(),
            now,
        );
        repo.create(&submission).await?;

        info!(feedback_id = %submission.id, "Feedback received");
        Ok(MessageResponse::new(FEEDBACK_THANKS))
    }
}
