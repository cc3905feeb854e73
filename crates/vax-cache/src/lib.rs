//! # vax-cache
//!
//! Redis layer for sessions, reminder markers, and pub/sub delivery.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh tokens behind the `SessionStore` port
//! - **Reminder Markers**: Shared idempotency markers with a TTL
//! - **Pub/Sub**: Live notification events across server instances
//!
//! ## Example
//!
//! ```ignore
//! use vax_cache::{Publisher, RedisPool, RedisPoolConfig, RedisReminderMarkerStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let markers = RedisReminderMarkerStore::new(pool.clone(), 45 * 86_400);
//! let publisher = Publisher::new(pool);
//! ```

pub mod marker;
pub mod pool;
pub mod pubsub;
pub mod session;

pub use marker::{RedisReminderMarkerStore, REMINDER_MARKER_PREFIX};
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use pubsub::{
    PubSubChannel, Publisher, ReceivedMessage, Subscriber, SubscriberConfig, SubscriberError,
    SubscriberResult, USER_CHANNEL_PATTERN, USER_CHANNEL_PREFIX,
};
pub use session::{RefreshTokenData, RefreshTokenStore};
