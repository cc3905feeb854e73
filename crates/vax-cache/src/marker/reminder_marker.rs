//! Shared reminder markers in Redis.
//!
//! A marker records that the reminder behind a dedup key was emitted, so
//! every device and server instance skips it afterwards. Markers expire once
//! the reminder window they guard has passed.

use async_trait::async_trait;
use vax_core::traits::{ReminderMarkerStore, RepoResult};

use crate::pool::RedisPool;

/// Key prefix for reminder markers
pub const REMINDER_MARKER_PREFIX: &str = "reminder_marker:";

/// Redis-backed [`ReminderMarkerStore`]
#[derive(Clone)]
pub struct RedisReminderMarkerStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisReminderMarkerStore {
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(dedup_key: &str) -> String {
        format!("{REMINDER_MARKER_PREFIX}{dedup_key}")
    }
}

#[async_trait]
impl ReminderMarkerStore for RedisReminderMarkerStore {
    async fn is_marked(&self, key: &str) -> RepoResult<bool> {
        Ok(self.pool.exists(&Self::key(key)).await?)
    }

    async fn mark(&self, key: &str) -> RepoResult<bool> {
        let created = self
            .pool
            .set_nx_ex(&Self::key(key), "1", self.ttl_seconds)
            .await?;
        if !created {
            tracing::debug!(key, "Reminder marker already present");
        }
        Ok(created)
    }
}
