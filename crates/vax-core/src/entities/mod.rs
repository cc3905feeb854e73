//! Domain entities - core business objects

mod community;
mod feedback;
mod notification;
mod user;
mod vaccination;
mod vaccine;

pub use community::{
    AgeGroupCoverage, Article, CoverageSummary, AGE_GROUP_COVERAGE, COMMUNITY_ARTICLES,
    OVERALL_COVERAGE,
};
pub use feedback::{
    cooldown_window_start, FeedbackSubmission, DEFAULT_CLIENT_IP, FEEDBACK_COOLDOWN_HOURS,
};
pub use notification::Notification;
pub use user::{Gender, ReminderChannel, User};
pub use vaccination::{UserVaccination, VaccinationRecord};
pub use vaccine::{find_vaccine, Vaccine, VACCINE_CATALOG};
