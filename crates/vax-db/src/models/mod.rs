//! Database models - SQLx-compatible structs for PostgreSQL tables

mod notification;
mod user;
mod vaccination;

pub use notification::NotificationModel;
pub use user::UserModel;
pub use vaccination::VaccinationDoseModel;
