//! Redis Pub/Sub subscriber.
//!
//! One pattern subscription per server instance covers every user channel.
//! Messages fan out over a broadcast channel; each notification stream
//! filters for its own user.

use crate::pubsub::{PubSubChannel, USER_CHANNEL_PATTERN};
use futures_util::StreamExt;
use redis::Client;
use tokio::sync::{broadcast, mpsc};
use vax_core::{DomainEvent, UserId};

/// Error type for subscriber operations
#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Channel closed")]
    ChannelClosed,
}

/// Result type for subscriber operations
pub type SubscriberResult<T> = Result<T, SubscriberError>;

/// Received message from Pub/Sub
#[derive(Debug, Clone)]
pub struct ReceivedMessage {
    /// Channel the message was received on
    pub channel: PubSubChannel,
    /// Parsed event (if valid JSON)
    pub event: Option<DomainEvent>,
    /// Raw payload
    pub payload: String,
}

impl ReceivedMessage {
    /// Create from raw Redis message
    fn from_redis(channel_name: &str, payload: String) -> Self {
        Self {
            channel: PubSubChannel::parse(channel_name),
            event: serde_json::from_str(&payload).ok(),
            payload,
        }
    }

    /// Whether this message is addressed to `user_id`
    #[must_use]
    pub fn is_for(&self, user_id: UserId) -> bool {
        self.channel.user_id() == Some(user_id)
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Redis connection URL
    pub redis_url: String,
    /// Channel buffer size for broadcast
    pub broadcast_buffer: usize,
    /// Reconnection delay in milliseconds
    pub reconnect_delay_ms: u64,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            broadcast_buffer: 1024,
            reconnect_delay_ms: 1000,
        }
    }
}

/// Redis Pub/Sub subscriber
pub struct Subscriber {
    broadcast_tx: broadcast::Sender<ReceivedMessage>,
    shutdown_tx: mpsc::Sender<()>,
}

impl Subscriber {
    /// Create a new subscriber and start the background listener
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(config: SubscriberConfig) -> Self {
        let (broadcast_tx, _) = broadcast::channel(config.broadcast_buffer);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        tokio::spawn(Self::listener_loop(config, broadcast_tx.clone(), shutdown_rx));

        Self {
            broadcast_tx,
            shutdown_tx,
        }
    }

    /// Background listener loop, reconnecting after errors
    async fn listener_loop(
        config: SubscriberConfig,
        broadcast_tx: broadcast::Sender<ReceivedMessage>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        loop {
            match Self::run_listener(&config, &broadcast_tx, &mut shutdown_rx).await {
                Ok(true) => {
                    tracing::info!("Subscriber shutting down");
                    break;
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Subscriber error, reconnecting...");
                }
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(
                config.reconnect_delay_ms,
            ))
            .await;
        }
    }

    /// Run the listener until error or shutdown. `Ok(true)` means shutdown.
    async fn run_listener(
        config: &SubscriberConfig,
        broadcast_tx: &broadcast::Sender<ReceivedMessage>,
        shutdown_rx: &mut mpsc::Receiver<()>,
    ) -> SubscriberResult<bool> {
        let client = Client::open(config.redis_url.as_str())?;
        let mut pubsub = client.get_async_pubsub().await?;
        pubsub.psubscribe(USER_CHANNEL_PATTERN).await?;

        tracing::info!(pattern = USER_CHANNEL_PATTERN, "Subscriber connected to Redis");

        let mut stream = pubsub.on_message();

        loop {
            tokio::select! {
                msg = stream.next() => {
                    let Some(msg) = msg else {
                        tracing::warn!("Pub/Sub stream ended");
                        return Ok(false);
                    };
                    let channel_name = msg.get_channel_name().to_string();
                    let payload: String = msg.get_payload().unwrap_or_default();

                    // no open streams is not an error
                    let _ = broadcast_tx.send(ReceivedMessage::from_redis(&channel_name, payload));

                    tracing::trace!(channel = %channel_name, "Received Pub/Sub message");
                }
                _ = shutdown_rx.recv() => {
                    return Ok(true);
                }
            }
        }
    }

    /// Get a receiver for broadcast messages
    #[must_use]
    pub fn receiver(&self) -> broadcast::Receiver<ReceivedMessage> {
        self.broadcast_tx.subscribe()
    }

    /// Shutdown the subscriber
    pub async fn shutdown(&self) -> SubscriberResult<()> {
        self.shutdown_tx
            .send(())
            .await
            .map_err(|_| SubscriberError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vax_core::events::NotificationReadEvent;
    use vax_core::NotificationId;

    #[test]
    fn test_received_message_parsing() {
        let user_id = UserId::new();
        let event = DomainEvent::NotificationRead(NotificationReadEvent {
            notification_id: NotificationId::new(),
            user_id,
            timestamp: Utc::now(),
        });
        let payload = serde_json::to_string(&event).unwrap();
        let msg = ReceivedMessage::from_redis(&PubSubChannel::user(user_id).name(), payload);

        assert!(msg.is_for(user_id));
        assert!(!msg.is_for(UserId::new()));
        assert!(matches!(msg.event, Some(DomainEvent::NotificationRead(_))));
    }

    #[test]
    fn test_received_message_invalid_json() {
        let user_id = UserId::new();
        let msg =
            ReceivedMessage::from_redis(&PubSubChannel::user(user_id).name(), "invalid".into());
        assert!(msg.is_for(user_id));
        assert!(msg.event.is_none());
        assert_eq!(msg.payload, "invalid");
    }

    #[test]
    fn test_subscriber_config_default() {
        let config = SubscriberConfig::default();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.broadcast_buffer, 1024);
        assert_eq!(config.reconnect_delay_ms, 1000);
    }
}
