//! Dose scheduling and reminder rules

mod projector;
mod reminder;

pub use projector::{project_upcoming_doses, UpcomingDose};
pub use reminder::{
    days_until_due, dedup_key, long_date, matching_threshold, ReminderCandidate,
    REMINDER_THRESHOLDS, REMINDER_TITLE,
};
