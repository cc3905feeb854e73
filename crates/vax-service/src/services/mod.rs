//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod catalog;
pub mod context;
pub mod error;
pub mod feedback;
pub mod notification;
pub mod reminder;
pub mod schedule;
pub mod simulation;
pub mod user;
pub mod vaccination;

#[cfg(test)]
mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult, RECOMMENDATION_FAILED};
pub use feedback::FeedbackService;
pub use notification::NotificationService;
pub use reminder::ReminderService;
pub use schedule::ScheduleService;
pub use simulation::SimulationService;
pub use user::UserService;
pub use vaccination::VaccinationService;
