//! User entity - a registered account and its profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Self-reported gender on the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Delivery channel used for reminder notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    #[default]
    Push,
    Email,
}

impl ReminderChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Email => "email",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "push" => Some(Self::Push),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

/// User account with profile fields and reminder preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    pub address: Option<String>,
    pub reminder_type: ReminderChannel,
    pub reminder_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with push reminders enabled
    pub fn new(
        id: UserId,
        username: String,
        email: String,
        age: u32,
        gender: Gender,
        address: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            age,
            gender,
            address,
            reminder_type: ReminderChannel::Push,
            reminder_email: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Address reminder emails should go to
    ///
    /// Falls back to the account email when no dedicated address is stored.
    pub fn reminder_address(&self) -> &str {
        self.reminder_email.as_deref().unwrap_or(&self.email)
    }

    /// Update editable profile fields. The account email is never touched.
    pub fn update_profile(
        &mut self,
        username: Option<String>,
        age: Option<u32>,
        gender: Option<Gender>,
        address: Option<Option<String>>,
    ) {
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(address) = address {
            self.address = address;
        }
        self.updated_at = Utc::now();
    }

    /// Switch reminder channel
    ///
    /// Email reminders store the given address; push reminders fall back to
    /// the account email.
    pub fn set_reminder_preferences(&mut self, channel: ReminderChannel, email: Option<String>) {
        self.reminder_type = channel;
        self.reminder_email = match channel {
            ReminderChannel::Email => email,
            ReminderChannel::Push => Some(self.email.clone()),
        };
        self.updated_at = Utc::now();
    }
}
