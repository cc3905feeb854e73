//! Value objects - immutable types that represent domain concepts

mod dose_timestamp;
mod ids;

pub use dose_timestamp::DoseTimestamp;
pub use ids::{FeedbackId, IdParseError, NotificationId, UserId};
