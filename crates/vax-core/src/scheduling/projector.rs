//! Dose-schedule projector
//!
//! Derives the next due dose of every vaccine a user has started but not
//! finished.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::warn;

use crate::entities::{Vaccine, VaccinationRecord};

/// Next dose due for one vaccine. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingDose {
    pub vaccine_id: &'static str,
    pub vaccine_name: &'static str,
    /// 1-based number of the dose that is due
    pub dose_number: u32,
    pub due_date: DateTime<Utc>,
}

/// Project the next due dose for each in-progress regimen
///
/// A vaccine contributes one entry when `0 < taken < doses` and it has a
/// known interval. The result is sorted by due date; entries due at the same
/// instant keep catalog order. A due date past chrono's range is skipped.
pub fn project_upcoming_doses(
    catalog: &[Vaccine],
    record: &VaccinationRecord,
) -> Vec<UpcomingDose> {
    let mut upcoming: Vec<UpcomingDose> = catalog
        .iter()
        .filter_map(|vaccine| {
            let history = record.get(vaccine.id)?;
            let taken = history.taken();
            if taken == 0 || taken >= vaccine.doses {
                return None;
            }
            let interval = vaccine.dose_interval_days?;
            let last = history.last_dose()?;
            let Some(due_date) = last.checked_add_signed(Duration::days(i64::from(interval)))
            else {
                warn!(vaccine = vaccine.id, %last, "Due date out of range, skipping");
                return None;
            };
            Some(UpcomingDose {
                vaccine_id: vaccine.id,
                vaccine_name: vaccine.name,
                dose_number: taken + 1,
                due_date,
            })
        })
        .collect();

    // stable: ties keep catalog order
    upcoming.sort_by_key(|dose| dose.due_date);
    upcoming
}
