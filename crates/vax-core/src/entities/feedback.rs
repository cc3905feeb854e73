//! Contact-form submission

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::FeedbackId;

/// How long an IP address has to wait between submissions
pub const FEEDBACK_COOLDOWN_HOURS: i64 = 24;

/// Address assumed when the request carries no forwarding header
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub id: FeedbackId,
    pub ip_address: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackSubmission {
    pub fn new(
        ip_address: String,
        name: String,
        email: String,
        message: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: FeedbackId::new(),
            ip_address,
            name,
            email,
            message,
            submitted_at,
        }
    }
}

/// Start of the window in which a previous submission blocks a new one
pub fn cooldown_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(FEEDBACK_COOLDOWN_HOURS)
}
