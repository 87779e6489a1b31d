use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};
use crate::profile::FieldKind;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

/// Client-side rejection of a draft. Never reaches the account service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    EmptyField,

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("New password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Username must be {min}-{max} characters (letters, numbers, underscores)")]
    InvalidUsername { min: usize, max: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("New value is the same as the current one")]
    Unchanged,
}

/// The account service rejected an update, or it could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ExternalUpdateError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileEditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to update: {0}")]
    External(#[from] ExternalUpdateError),

    #[error("{0} is not being edited")]
    NotEditing(FieldKind),

    #[error("An update is already in progress")]
    SubmissionInFlight,

    #[error("Unknown input: {0}")]
    UnknownInput(String),

    #[error("Input {input} does not belong to {field}")]
    ForeignInput { input: String, field: FieldKind },

    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

impl ProfileEditError {
    /// Whether this error should be shown next to the field that caused it
    pub fn is_field_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::External(_))
    }
}
