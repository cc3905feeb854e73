//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, paths, queries and the
//! client address.

mod auth;
mod client_ip;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use client_ip::ClientIp;
pub use path::{ApiPath, DosePath, NotificationIdPath, VaccineIdPath};
pub use query::ApiQuery;
pub use validated::{ApiJson, OptionalJson, ValidatedJson};
