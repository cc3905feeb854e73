//! Reminder rules for upcoming doses
//!
//! A reminder fires only when a dose is due in exactly one of the threshold
//! day counts. Evaluation happens when the schedule is requested, so a user
//! who does not check in on that exact day gets no reminder for it.

use chrono::{DateTime, Datelike, Utc};

use crate::entities::{Notification, ReminderChannel};
use crate::scheduling::UpcomingDose;
use crate::value_objects::UserId;

/// Days-before-due at which a reminder is emitted
pub const REMINDER_THRESHOLDS: [i64; 2] = [10, 30];

pub const REMINDER_TITLE: &str = "Vaccine Reminder";

/// Whole days between `now` and `due`, truncated toward zero
pub fn days_until_due(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (due - now).num_days()
}

/// Threshold matched by `days`, if any
pub fn matching_threshold(days: i64) -> Option<i64> {
    REMINDER_THRESHOLDS.iter().copied().find(|t| *t == days)
}

/// Idempotency key for one (user, vaccine, dose, threshold) reminder
pub fn dedup_key(user_id: UserId, vaccine_name: &str, dose_number: u32, days: i64) -> String {
    format!("notif_{user_id}_{vaccine_name}_dose{dose_number}_{days}days")
}

/// A reminder that is due to be emitted for one upcoming dose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderCandidate {
    pub key: String,
    pub days_until_due: i64,
    pub dose: UpcomingDose,
}

impl ReminderCandidate {
    /// Evaluate `dose` against the thresholds at `now`
    pub fn evaluate(user_id: UserId, dose: &UpcomingDose, now: DateTime<Utc>) -> Option<Self> {
        let days = matching_threshold(days_until_due(dose.due_date, now))?;
        Some(Self {
            key: dedup_key(user_id, dose.vaccine_name, dose.dose_number, days),
            days_until_due: days,
            dose: dose.clone(),
        })
    }

    pub fn message(&self) -> String {
        format!(
            "{} (Dose {}) is due in {} days on {}.",
            self.dose.vaccine_name,
            self.dose.dose_number,
            self.days_until_due,
            long_date(self.dose.due_date)
        )
    }

    /// Build the notification delivered for this reminder
    pub fn into_notification(
        self,
        user_id: UserId,
        channel: ReminderChannel,
        now: DateTime<Utc>,
    ) -> Notification {
        let message = self.message();
        Notification::new(user_id, channel, REMINDER_TITLE, message, now)
    }
}

/// Format a date as `April 29th, 2024`
pub fn long_date(date: DateTime<Utc>) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 19, 9, 0, 0).unwrap()
    }

    fn dose_due_in(days: i64) -> UpcomingDose {
        UpcomingDose {
            vaccine_id: "HepB",
            vaccine_name: "Hepatitis B",
            dose_number: 2,
            due_date: now() + Duration::days(days),
        }
    }

    #[test]
    fn test_days_truncate() {
        let due = now() + Duration::days(10) + Duration::hours(23);
        assert_eq!(days_until_due(due, now()), 10);
        let due = now() + Duration::days(9) + Duration::hours(23);
        assert_eq!(days_until_due(due, now()), 9);
    }

    #[test]
    fn test_only_exact_thresholds_match() {
        for days in [10, 30] {
            assert_eq!(matching_threshold(days), Some(days));
        }
        // a missed day is not caught up later
        for days in [0, 9, 11, 29, 31, -10] {
            assert_eq!(matching_threshold(days), None);
        }
    }

    #[test]
    fn test_dedup_key_format() {
        let uuid = uuid::Uuid::parse_str("6f1c2a9e-2b7d-4c1e-9a55-0d3f9b1e8c42").unwrap();
        let key = dedup_key(UserId::from_uuid(uuid), "Hepatitis B", 2, 10);
        assert_eq!(
            key,
            "notif_6f1c2a9e-2b7d-4c1e-9a55-0d3f9b1e8c42_Hepatitis B_dose2_10days"
        );
    }

    #[test]
    fn test_candidate_for_threshold_day() {
        let user = UserId::new();
        let candidate = ReminderCandidate::evaluate(user, &dose_due_in(30), now()).unwrap();
        assert_eq!(candidate.days_until_due, 30);
        assert!(candidate.key.ends_with("_dose2_30days"));
        assert!(ReminderCandidate::evaluate(user, &dose_due_in(31), now()).is_none());
    }

    #[test]
    fn test_notification_text() {
        let user = UserId::new();
        let candidate = ReminderCandidate::evaluate(user, &dose_due_in(10), now()).unwrap();
        let notification = candidate.into_notification(user, ReminderChannel::Email, now());
        assert_eq!(notification.title, "Vaccine Reminder");
        assert_eq!(
            notification.message,
            "Hepatitis B (Dose 2) is due in 10 days on April 29th, 2024."
        );
        assert_eq!(notification.channel, ReminderChannel::Email);
        assert!(notification.is_unread());
    }

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (31, "31st"),
        ];
        for (day, expected) in cases {
            assert_eq!(format!("{day}{}", ordinal_suffix(day)), expected);
        }
    }

    #[test]
    fn test_long_date() {
        let date = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(long_date(date), "January 2nd, 2025");
    }
}
