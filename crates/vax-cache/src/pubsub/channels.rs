//! Pub/Sub channel definitions.
//!
//! Every user has one live channel carrying their notification and
//! vaccination events.

use vax_core::UserId;

/// Channel prefix for per-user live events
pub const USER_CHANNEL_PREFIX: &str = "notifications:user:";

/// Pattern matching every user channel
pub const USER_CHANNEL_PATTERN: &str = "notifications:user:*";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Events for a specific user (all their devices)
    User(UserId),
    /// Any other channel name
    Custom(String),
}

impl PubSubChannel {
    #[must_use]
    pub fn user(user_id: UserId) -> Self {
        Self::User(user_id)
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::User(id) => format!("{USER_CHANNEL_PREFIX}{id}"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.strip_prefix(USER_CHANNEL_PREFIX)
            .and_then(|id| id.parse::<UserId>().ok())
            .map_or_else(|| Self::Custom(name.to_string()), Self::User)
    }

    /// User this channel belongs to, if any
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User(id) => Some(*id),
            Self::Custom(_) => None,
        }
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
