//! User entity <-> model mapper

use vax_core::entities::{Gender, ReminderChannel, User};
use vax_core::error::DomainError;
use vax_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Fails only when a row carries a gender or channel the schema checks
/// should have rejected.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let gender = Gender::parse(&model.gender).ok_or_else(|| {
            DomainError::DatabaseError(format!("Unknown gender in users row: {}", model.gender))
        })?;
        let reminder_type = ReminderChannel::parse(&model.reminder_type).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "Unknown reminder type in users row: {}",
                model.reminder_type
            ))
        })?;

        Ok(User {
            id: UserId::from_uuid(model.id),
            username: model.username,
            email: model.email,
            age: u32::try_from(model.age).unwrap_or_default(),
            gender,
            address: model.address,
            reminder_type,
            reminder_email: model.reminder_email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values bound when inserting a user
pub struct UserInsert<'a> {
    pub id: uuid::Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub age: i32,
    pub gender: &'static str,
    pub address: Option<&'a str>,
    pub reminder_type: &'static str,
    pub reminder_email: Option<&'a str>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            email: &user.email,
            password_hash,
            age: age_to_db(user.age),
            gender: user.gender.as_str(),
            address: user.address.as_deref(),
            reminder_type: user.reminder_type.as_str(),
            reminder_email: user.reminder_email.as_deref(),
        }
    }
}

/// Values bound when updating profile and reminder preferences
pub struct UserUpdate<'a> {
    pub id: uuid::Uuid,
    pub username: &'a str,
    pub age: i32,
    pub gender: &'static str,
    pub address: Option<&'a str>,
    pub reminder_type: &'static str,
    pub reminder_email: Option<&'a str>,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            age: age_to_db(user.age),
            gender: user.gender.as_str(),
            address: user.address.as_deref(),
            reminder_type: user.reminder_type.as_str(),
            reminder_email: user.reminder_email.as_deref(),
        }
    }
}

fn age_to_db(age: u32) -> i32 {
    i32::try_from(age).unwrap_or(i32::MAX)
}
