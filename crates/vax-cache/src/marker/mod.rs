//! Reminder idempotency markers.

mod reminder_marker;

pub use reminder_marker::{RedisReminderMarkerStore, REMINDER_MARKER_PREFIX};
