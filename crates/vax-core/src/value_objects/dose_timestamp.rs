//! Dose timestamps as they arrive on the wire
//!
//! Vaccination records exported from document stores carry either an ISO-8601
//! string or a `{ seconds, nanoseconds }` object. Both are normalised to
//! `DateTime<Utc>` before any schedule arithmetic happens.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Latest year a dose timestamp may carry, the limit of a four-digit ISO year
pub const MAX_DOSE_YEAR: i32 = 9999;

/// A dose timestamp in one of the accepted wire representations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoseTimestamp {
    /// ISO-8601 / RFC 3339 string, e.g. `2024-03-01T09:30:00Z`
    Iso(String),
    /// Structured document-store timestamp
    Structured { seconds: i64, nanoseconds: u32 },
}

impl DoseTimestamp {
    /// Normalise to UTC, returning `None` when the value cannot be interpreted
    /// or lies outside years 0 to [`MAX_DOSE_YEAR`]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let at = match self {
            Self::Iso(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Structured {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds),
        }?;
        (0..=MAX_DOSE_YEAR).contains(&at.year()).then_some(at)
    }
}

impl From<DateTime<Utc>> for DoseTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Iso(dt.to_rfc3339())
    }
}
