//! Vaccination dose database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One administered dose, a row of vaccination_doses
#[derive(Debug, Clone, FromRow)]
pub struct VaccinationDoseModel {
    pub vaccine_id: String,
    pub dose_index: i32,
    pub administered_at: DateTime<Utc>,
}
