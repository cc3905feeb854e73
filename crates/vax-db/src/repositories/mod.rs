//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in vax-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod feedback;
mod notification;
mod user;
mod vaccination;

pub use feedback::PgFeedbackRepository;
pub use notification::PgNotificationRepository;
pub use user::PgUserRepository;
pub use vaccination::PgVaccinationRepository;
