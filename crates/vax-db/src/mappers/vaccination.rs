//! Dose rows <-> vaccination record

use vax_core::entities::{UserVaccination, VaccinationRecord};

use crate::models::VaccinationDoseModel;

/// Group dose rows by vaccine id
///
/// Negative indices cannot pass the schema check and are skipped.
pub fn record_from_rows(rows: Vec<VaccinationDoseModel>) -> VaccinationRecord {
    let mut record = VaccinationRecord::new();
    for row in rows {
        let Ok(index) = u32::try_from(row.dose_index) else {
            continue;
        };
        record
            .entry(row.vaccine_id)
            .or_default()
            .doses
            .insert(index, row.administered_at);
    }
    record
}

/// Dose history of a single vaccine from its rows
pub fn vaccination_from_rows(rows: Vec<VaccinationDoseModel>) -> UserVaccination {
    let mut vaccination = UserVaccination::new();
    for row in rows {
        if let Ok(index) = u32::try_from(row.dose_index) {
            vaccination.doses.insert(index, row.administered_at);
        }
    }
    vaccination
}

/// Convert a dose index for binding
pub fn dose_index_to_db(index: u32) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
