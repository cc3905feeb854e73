//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and most implement `Validate`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use validator::Validate;
use vax_core::entities::{Gender, ReminderChannel};
use vax_core::simulation::{DEFAULT_EFFICACY, DEFAULT_INITIAL_INFECTED};
use vax_core::DoseTimestamp;

/// Distinguish an absent field from an explicit `null`
fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 64, message = "Username must be at least 2 characters."))]
    pub username: String,

    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be at least 6 characters."))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords don't match"))]
    pub confirm_password: String,

    #[validate(range(min = 0, message = "Age cannot be negative."))]
    pub age: i32,

    pub gender: Gender,

    #[validate(length(max = 500, message = "Address must be at most 500 characters."))]
    pub address: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update; the account email cannot be changed here
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 64, message = "Username must be at least 2 characters."))]
    pub username: Option<String>,

    #[validate(range(min = 0, message = "Age cannot be negative."))]
    pub age: Option<i32>,

    pub gender: Option<Gender>,

    /// `null` clears the address, an absent field leaves it alone
    #[serde(default, deserialize_with = "deserialize_some")]
    pub address: Option<Option<String>>,
}

/// Reminder preferences update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReminderSettingsRequest {
    pub reminder_type: ReminderChannel,

    /// Required when `reminder_type` is `email`
    #[validate(email(message = "Please enter a valid email."))]
    pub email: Option<String>,
}

// ============================================================================
// Vaccination Requests
// ============================================================================

/// Whole-record import: vaccine id to dose index to timestamp
///
/// Timestamps may be ISO-8601 strings or `{ seconds, nanoseconds }` objects.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImportVaccinationsRequest {
    pub vaccinations: BTreeMap<String, BTreeMap<u32, DoseTimestamp>>,
}

// ============================================================================
// Notification Requests
// ============================================================================

/// Query parameters for the notification feed
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NotificationQuery {
    pub limit: Option<i64>,
}

// ============================================================================
// Simulation Requests
// ============================================================================

fn default_efficacy() -> f64 {
    DEFAULT_EFFICACY
}

fn default_initial_infected() -> u64 {
    DEFAULT_INITIAL_INFECTED
}

/// Risk simulation inputs. `immunity` defaults to the overall coverage rate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RiskSimulationRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "Immunity must be between 0 and 100."))]
    pub immunity: Option<f64>,

    #[serde(default = "default_efficacy")]
    #[validate(range(min = 0.0, max = 100.0, message = "Efficacy must be between 0 and 100."))]
    pub efficacy: f64,

    #[serde(default = "default_initial_infected")]
    pub initial_infected: u64,
}

impl Default for RiskSimulationRequest {
    fn default() -> Self {
        Self {
            immunity: None,
            efficacy: DEFAULT_EFFICACY,
            initial_infected: DEFAULT_INITIAL_INFECTED,
        }
    }
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be at least 2 characters."))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,

    #[validate(length(min = 10, max = 5000, message = "Message must be at least 10 characters."))]
    pub message: String,
}
