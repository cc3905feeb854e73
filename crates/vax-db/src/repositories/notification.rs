//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vax_core::entities::Notification;
use vax_core::traits::{NotificationRepository, RepoResult};
use vax_core::value_objects::{NotificationId, UserId};

use crate::models::NotificationModel;

use super::error::{map_db_error, notification_not_found};

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: NotificationId) -> RepoResult<Option<Notification>> {
        let result = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, user_id, channel, title, message, read, created_at
            FROM notifications
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Notification::try_from).transpose()
    }

    #[instrument(skip(self, notification), fields(notification_id = %notification.id))]
    async fn create_reminder(
        &self,
        notification: &Notification,
        dedup_key: &str,
    ) -> RepoResult<bool> {
        // the partial unique index on dedup_key makes this insert the
        // authoritative exactly-once check across devices
        let result = sqlx::query(
            r"
            INSERT INTO notifications (id, user_id, channel, title, message, dedup_key, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (dedup_key) WHERE dedup_key IS NOT NULL DO NOTHING
            ",
        )
        .bind(notification.id.into_inner())
        .bind(notification.user_id.into_inner())
        .bind(notification.channel.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(dedup_key)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, user_id, channel, title, message, read, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: NotificationId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE notifications SET read = TRUE WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(id));
        }

        Ok(())
    }
}
