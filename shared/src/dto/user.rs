use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// Account role as reported by the account service.
///
/// Anything the service sends that we do not recognise is shown as unlabeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Publisher,
    #[default]
    #[serde(other)]
    Unlabeled,
}

impl Role {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("Admin"),
            Role::User => Some("User"),
            Role::Publisher => Some("Publisher"),
            Role::Unlabeled => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("Member"))
    }
}

/// Read-only snapshot of the signed-in user's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub member_since: DateTime<FixedOffset>,
}

impl UserProfileDto {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Validates a snapshot that came from an untrusted place (local storage, old builds)
    pub fn validated(self) -> crate::Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// Request for changing the username
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUsernameRequest {
    #[validate(length(min = 3, max = 50))]
    #[validate(regex = "USERNAME_REGEX")]
    pub username: String,
}

/// Request for changing the email address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEmailRequest {
    #[validate(email)]
    pub email: String,
}

/// Request for changing the password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}
