//! Per-user dose history

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entities::Vaccine;
use crate::error::DomainError;
use crate::value_objects::DoseTimestamp;

/// All dose histories of one user keyed by vaccine id
pub type VaccinationRecord = BTreeMap<String, UserVaccination>;

/// Doses administered for one vaccine, keyed by 0-based dose index
///
/// Indices are kept contiguous from zero: a dose can only be recorded when
/// the previous one is present, and removing a dose removes every later one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVaccination {
    pub doses: BTreeMap<u32, DateTime<Utc>>,
}

impl UserVaccination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of doses taken, counted as the contiguous prefix from index 0
    pub fn taken(&self) -> u32 {
        let mut count = 0;
        while self.doses.contains_key(&count) {
            count += 1;
        }
        count
    }

    /// Timestamp of the last dose in the contiguous prefix
    pub fn last_dose(&self) -> Option<DateTime<Utc>> {
        match self.taken() {
            0 => None,
            n => self.doses.get(&(n - 1)).copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }

    /// Record dose `index` as administered at `at`
    ///
    /// Re-recording the latest dose overwrites its timestamp. An earlier dose
    /// is locked while a later one is recorded, so timestamps stay in dose
    /// order.
    pub fn record_dose(
        &mut self,
        vaccine: &Vaccine,
        index: u32,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if index >= vaccine.doses {
            return Err(DomainError::DoseOutOfRange {
                vaccine: vaccine.id.to_string(),
                index,
                doses: vaccine.doses,
            });
        }
        if index > 0 && !self.doses.contains_key(&(index - 1)) {
            return Err(DomainError::DoseOutOfOrder {
                vaccine: vaccine.id.to_string(),
                index,
            });
        }
        if self.doses.contains_key(&(index + 1)) {
            return Err(DomainError::DoseLocked {
                vaccine: vaccine.id.to_string(),
                index,
            });
        }
        self.doses.insert(index, at);
        Ok(())
    }

    /// Remove dose `index` and every later dose of the regimen
    ///
    /// Returns the indices that were actually removed.
    pub fn clear_from(&mut self, vaccine: &Vaccine, index: u32) -> Result<Vec<u32>, DomainError> {
        if index >= vaccine.doses {
            return Err(DomainError::DoseOutOfRange {
                vaccine: vaccine.id.to_string(),
                index,
                doses: vaccine.doses,
            });
        }
        let removed: Vec<u32> = self.doses.range(index..).map(|(i, _)| *i).collect();
        for i in &removed {
            self.doses.remove(i);
        }
        Ok(removed)
    }

    /// Build from wire timestamps, keeping only the contiguous prefix
    ///
    /// Entries whose timestamp cannot be parsed end the prefix, as do indices
    /// beyond the regimen length.
    pub fn from_wire(vaccine: &Vaccine, doses: &BTreeMap<u32, DoseTimestamp>) -> Self {
        let mut record = Self::new();
        for index in 0..vaccine.doses {
            let Some(raw) = doses.get(&index) else {
                break;
            };
            match raw.to_utc() {
                Some(at) => {
                    record.doses.insert(index, at);
                }
                None => {
                    warn!(vaccine = vaccine.id, index, "Skipping unparseable dose timestamp");
                    break;
                }
            }
        }
        let dropped = doses.len().saturating_sub(record.doses.len());
        if dropped > 0 {
            warn!(
                vaccine = vaccine.id,
                dropped, "Dropped non-contiguous or out-of-range doses"
            );
        }
        record
    }
}
