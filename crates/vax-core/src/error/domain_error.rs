//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{NotificationId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Vaccine not found: {0}")]
    VaccineNotFound(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(NotificationId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Dose {index} is out of range for {vaccine} ({doses} doses)")]
    DoseOutOfRange {
        vaccine: String,
        index: u32,
        doses: u32,
    },

    #[error("Dose {index} of {vaccine} requires the previous dose to be recorded")]
    DoseOutOfOrder { vaccine: String, index: u32 },

    #[error("Dose {index} of {vaccine} cannot be changed while later doses are recorded")]
    DoseLocked { vaccine: String, index: u32 },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not notification owner")]
    NotNotificationOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("This email is already registered. Please log in.")]
    EmailAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("You have already submitted feedback recently. Please try again later.")]
    FeedbackRateLimited,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::VaccineNotFound(_) => "UNKNOWN_VACCINE",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DoseOutOfRange { .. } => "DOSE_OUT_OF_RANGE",
            Self::DoseOutOfOrder { .. } => "DOSE_OUT_OF_ORDER",
            Self::DoseLocked { .. } => "DOSE_LOCKED",

            // Authorization
            Self::NotNotificationOwner => "NOT_NOTIFICATION_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Business Rules
            Self::FeedbackRateLimited => "FEEDBACK_RATE_LIMITED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::VaccineNotFound(_) | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::DoseOutOfRange { .. }
                | Self::DoseOutOfOrder { .. }
                | Self::DoseLocked { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotNotificationOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if the caller should back off and retry later
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::FeedbackRateLimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::VaccineNotFound("XYZ".to_string());
        assert_eq!(err.code(), "UNKNOWN_VACCINE");

        let err = DomainError::DoseOutOfOrder {
            vaccine: "OPV".to_string(),
            index: 2,
        };
        assert_eq!(err.code(), "DOSE_OUT_OF_ORDER");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new()).is_not_found());
        assert!(DomainError::NotificationNotFound(NotificationId::new()).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_categories() {
        assert!(DomainError::NotNotificationOwner.is_authorization());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(DomainError::FeedbackRateLimited.is_rate_limited());
        assert!(DomainError::DoseOutOfRange {
            vaccine: "MMR".to_string(),
            index: 5,
            doses: 2
        }
        .is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::DoseOutOfRange {
            vaccine: "MMR".to_string(),
            index: 2,
            doses: 2,
        };
        assert_eq!(err.to_string(), "Dose 2 is out of range for MMR (2 doses)");

        assert_eq!(
            DomainError::EmailAlreadyExists.to_string(),
            "This email is already registered. Please log in."
        );
    }
}
