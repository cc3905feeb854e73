//! # vax-core
//!
//! Domain layer: the vaccine catalog, per-user dose history, the dose
//! schedule projector, reminder rules, the outbreak risk model, and the
//! repository traits the infrastructure crates implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod scheduling;
pub mod simulation;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    find_vaccine, FeedbackSubmission, Gender, Notification, ReminderChannel, User,
    UserVaccination, Vaccine, VaccinationRecord, VACCINE_CATALOG,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use scheduling::{project_upcoming_doses, ReminderCandidate, UpcomingDose};
pub use simulation::{RiskParameters, RiskProjection};
pub use traits::{
    EventPublisher, FeedbackRepository, NotificationRepository, Recommendation,
    RecommendationRequest, RecommendationService, ReminderMarkerStore, RepoResult, SessionStore,
    UserRepository, VaccinationRepository,
};
pub use value_objects::{DoseTimestamp, FeedbackId, IdParseError, NotificationId, UserId};
