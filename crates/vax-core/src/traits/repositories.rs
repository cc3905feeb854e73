//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{FeedbackSubmission, Notification, User, UserVaccination, VaccinationRecord};
use crate::error::DomainError;
use crate::value_objects::{NotificationId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields and reminder preferences. Never changes the email.
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Vaccination Repository
// ============================================================================

#[async_trait]
pub trait VaccinationRepository: Send + Sync {
    /// All dose histories of a user, keyed by vaccine id
    async fn get_record(&self, user_id: UserId) -> RepoResult<VaccinationRecord>;

    /// Dose history of one vaccine, empty if none recorded
    async fn get_vaccination(&self, user_id: UserId, vaccine_id: &str)
        -> RepoResult<UserVaccination>;

    /// Insert or overwrite a single dose
    async fn upsert_dose(
        &self,
        user_id: UserId,
        vaccine_id: &str,
        index: u32,
        administered_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Delete dose `index` and all later doses, returning how many were removed
    async fn delete_doses_from(&self, user_id: UserId, vaccine_id: &str, index: u32)
        -> RepoResult<u64>;

    /// Replace the user's whole record
    async fn replace_record(&self, user_id: UserId, record: &VaccinationRecord) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Find notification by ID
    async fn find_by_id(&self, id: NotificationId) -> RepoResult<Option<Notification>>;

    /// Append a reminder notification guarded by its dedup key
    ///
    /// Returns `false` without writing when a notification with the same key
    /// already exists.
    async fn create_reminder(&self, notification: &Notification, dedup_key: &str)
        -> RepoResult<bool>;

    /// A user's notifications, newest first
    async fn list_for_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Notification>>;

    /// Mark a notification as read
    async fn mark_read(&self, id: NotificationId) -> RepoResult<()>;
}

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Whether `ip_address` submitted anything at or after `since`
    async fn has_submission_since(&self, ip_address: &str, since: DateTime<Utc>)
        -> RepoResult<bool>;

    /// Record a submission
    async fn create(&self, submission: &FeedbackSubmission) -> RepoResult<()>;
}
