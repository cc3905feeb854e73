//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use vax_core::entities::FeedbackSubmission;
use vax_core::traits::{FeedbackRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self))]
    async fn has_submission_since(
        &self,
        ip_address: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM feedback_submissions
                WHERE ip_address = $1 AND submitted_at >= $2
            )
            ",
        )
        .bind(ip_address)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, submission), fields(ip = %submission.ip_address))]
    async fn create(&self, submission: &FeedbackSubmission) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO feedback_submissions (id, ip_address, name, email, message, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(submission.id.into_inner())
        .bind(&submission.ip_address)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .bind(submission.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
