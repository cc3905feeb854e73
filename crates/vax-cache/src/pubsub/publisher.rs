//! Redis Pub/Sub publisher.
//!
//! Publishes domain events to the owning user's channel so every open
//! notification stream, on any server instance, receives them.

use async_trait::async_trait;
use redis::AsyncCommands;
use vax_core::traits::{EventPublisher, RepoResult};
use vax_core::DomainEvent;

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel, returning the number of receivers
    pub async fn publish_to(&self, channel: &PubSubChannel, event: &DomainEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = serde_json::to_string(event)?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = event.event_type(),
            receivers,
            "Published event"
        );

        Ok(receivers)
    }
}

#[async_trait]
impl EventPublisher for Publisher {
    async fn publish(&self, event: &DomainEvent) -> RepoResult<()> {
        let channel = PubSubChannel::user(event.user_id());
        self.publish_to(&channel, event).await?;
        Ok(())
    }
}
