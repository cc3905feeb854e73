//! Redis Pub/Sub module.
//!
//! Live delivery of domain events to notification streams.

mod channels;
mod publisher;
mod subscriber;

pub use channels::{PubSubChannel, USER_CHANNEL_PATTERN, USER_CHANNEL_PREFIX};
pub use publisher::Publisher;
pub use subscriber::{
    ReceivedMessage, Subscriber, SubscriberConfig, SubscriberError, SubscriberResult,
};
