//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod community;
pub mod feedback;
pub mod health;
pub mod notifications;
pub mod simulations;
pub mod users;
pub mod vaccinations;
pub mod vaccines;
