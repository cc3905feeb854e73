//! Entity to model mappers
//!
//! Conversions between domain entities (vax-core) and database models.
//! - `TryFrom<Model> for Entity`: rows with enum columns are parsed and may fail
//! - `*Insert`/`*Update` structs: prepare entity data for binding

mod notification;
mod user;
mod vaccination;

pub use user::{UserInsert, UserUpdate};
pub use vaccination::{dose_index_to_db, record_from_rows, vaccination_from_rows};
