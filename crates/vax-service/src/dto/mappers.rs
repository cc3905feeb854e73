//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use vax_core::entities::{
    CoverageSummary, Notification, User, UserVaccination, Vaccine, VaccinationRecord,
    AGE_GROUP_COVERAGE,
};
use vax_core::{Recommendation, RiskProjection, UpcomingDose};

use super::responses::{
    CoverageResponse, CurrentUserResponse, NotificationResponse, OverallCoverageResponse,
    RecommendationResponse, ReminderSettingsResponse, RiskSimulationResponse,
    UpcomingDoseResponse, UserVaccinationResponse, VaccinationRecordResponse, VaccineResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            age: user.age,
            gender: user.gender,
            address: user.address.clone(),
            reminder_type: user.reminder_type,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for ReminderSettingsResponse {
    fn from(user: &User) -> Self {
        Self {
            reminder_type: user.reminder_type,
            email: user.reminder_address().to_string(),
        }
    }
}

// ============================================================================
// Vaccination Mappers
// ============================================================================

impl From<&'static Vaccine> for VaccineResponse {
    fn from(vaccine: &'static Vaccine) -> Self {
        Self {
            id: vaccine.id,
            name: vaccine.name,
            diseases: vaccine.diseases,
            doses: vaccine.doses,
            age: vaccine.age,
            dose_interval: vaccine.dose_interval,
            dose_interval_days: vaccine.dose_interval_days,
        }
    }
}

impl From<&UserVaccination> for UserVaccinationResponse {
    fn from(vaccination: &UserVaccination) -> Self {
        Self {
            taken: vaccination.taken(),
            doses: vaccination.doses.clone(),
        }
    }
}

/// Map a whole record, leaving out vaccines with no doses
pub fn record_response(record: &VaccinationRecord) -> VaccinationRecordResponse {
    record
        .iter()
        .filter(|(_, vaccination)| !vaccination.is_empty())
        .map(|(id, vaccination)| (id.clone(), UserVaccinationResponse::from(vaccination)))
        .collect()
}

impl From<UpcomingDose> for UpcomingDoseResponse {
    fn from(dose: UpcomingDose) -> Self {
        Self {
            vaccine_id: dose.vaccine_id,
            vaccine_name: dose.vaccine_name,
            dose_number: dose.dose_number,
            due_date: dose.due_date,
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            channel: notification.channel,
            title: notification.title.clone(),
            message: notification.message.clone(),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}

// ============================================================================
// Simulation / Community Mappers
// ============================================================================

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            should_remind: recommendation.should_remind,
            reason: recommendation.reason,
        }
    }
}

impl RiskSimulationResponse {
    pub fn new(projection: &RiskProjection, recommendation: Recommendation) -> Self {
        Self {
            reproduction_number: projection.reproduction_number,
            projected_cases: projection.projected_cases,
            initial_infected: projection.initial_infected,
            narrative: projection.narrative(),
            recommendation: recommendation.into(),
        }
    }
}

impl From<CoverageSummary> for CoverageResponse {
    fn from(summary: CoverageSummary) -> Self {
        Self {
            overall: OverallCoverageResponse {
                rate: summary.rate,
                population: summary.population,
                vaccinated: summary.vaccinated(),
            },
            age_groups: AGE_GROUP_COVERAGE,
        }
    }
}
