//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixed with the process id so reruns against the same database do not
/// collide on emails.
pub fn unique_suffix() -> u64 {
    u64::from(std::process::id()) * 1_000_000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: i32,
    pub gender: String,
    pub address: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            confirm_password: "TestPass123!".to_string(),
            age: 30,
            gender: "female".to_string(),
            address: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub gender: String,
    pub address: Option<String>,
    pub reminder_type: String,
    pub created_at: String,
}

/// Reminder preferences
#[derive(Debug, Serialize, Deserialize)]
pub struct ReminderSettings {
    pub reminder_type: String,
    pub email: String,
}

/// One vaccine's dose history
#[derive(Debug, Deserialize)]
pub struct VaccinationResponse {
    pub taken: u32,
    pub doses: BTreeMap<u32, String>,
}

/// Whole vaccination record keyed by vaccine id
pub type RecordResponse = BTreeMap<String, VaccinationResponse>;

/// Whole-record import body
#[derive(Debug, Serialize)]
pub struct ImportRequest {
    pub vaccinations: BTreeMap<String, BTreeMap<u32, serde_json::Value>>,
}

impl ImportRequest {
    /// A record holding only dose 0 of `vaccine_id`
    pub fn single_dose(vaccine_id: &str, administered_at: serde_json::Value) -> Self {
        let doses = BTreeMap::from([(0, administered_at)]);
        Self {
            vaccinations: BTreeMap::from([(vaccine_id.to_string(), doses)]),
        }
    }
}

/// Next due dose
#[derive(Debug, Deserialize)]
pub struct UpcomingDoseResponse {
    pub vaccine_id: String,
    pub vaccine_name: String,
    pub dose_number: u32,
    pub due_date: String,
}

/// Notification feed entry
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub channel: String,
    pub title: String,
    pub message: String,
    pub read: bool,
}

/// Catalog entry
#[derive(Debug, Deserialize)]
pub struct VaccineResponse {
    pub id: String,
    pub name: String,
    pub doses: u32,
    pub dose_interval_days: Option<u32>,
}

/// Coverage statistics
#[derive(Debug, Deserialize)]
pub struct CoverageResponse {
    pub overall: OverallCoverage,
    pub age_groups: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct OverallCoverage {
    pub rate: u32,
    pub population: u64,
    pub vaccinated: u64,
}

/// Contact form submission
#[derive(Debug, Serialize)]
pub struct FeedbackRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackRequest {
    pub fn valid() -> Self {
        Self {
            name: "Test Person".to_string(),
            email: "person@example.com".to_string(),
            message: "The reminders helped a lot, thank you.".to_string(),
        }
    }
}

/// Plain message body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
