//! Repository and infrastructure traits

mod ports;
mod repositories;

pub use ports::{
    EventPublisher, Recommendation, RecommendationRequest, RecommendationService,
    ReminderMarkerStore, SessionStore,
};
pub use repositories::{
    FeedbackRepository, NotificationRepository, RepoResult, UserRepository,
    VaccinationRepository,
};
