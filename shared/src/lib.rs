pub mod dto {
    pub mod common;
    pub mod user;
}

pub mod profile {
    pub mod controller;
    pub mod field;
    pub mod panel;
    pub mod session;

    pub use controller::{
        Completion, EditController, ProfileUpdate, SubmitRequest, SubmitTicket, UpdateOutcome,
    };
    pub use field::{DraftField, FieldKind};
    pub use panel::{PanelState, ProfileTab, TabDescriptor};
    pub use session::{EditPhase, EditSession};

    /// Minimum accepted length for a new password
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Username length bounds, inclusive
    pub const MIN_USERNAME_LENGTH: usize = 3;
    pub const MAX_USERNAME_LENGTH: usize = 50;
}

pub mod error;
pub mod search;
pub mod services;

// Re-export commonly used items
pub use error::{ExternalUpdateError, ProfileEditError, Result, SharedError, ValidationError};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    user::{Role, UpdateEmailRequest, UpdatePasswordRequest, UpdateUsernameRequest, UserProfileDto},
};
