use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of independent edit tracking on the profile panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    Username,
    Email,
    Password,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Username, FieldKind::Email, FieldKind::Password];

    /// Draft inputs owned by this field kind, in form order
    pub fn drafts(self) -> &'static [DraftField] {
        match self {
            FieldKind::Username => &[DraftField::Username],
            FieldKind::Email => &[DraftField::Email],
            FieldKind::Password => &[
                DraftField::CurrentPassword,
                DraftField::NewPassword,
                DraftField::ConfirmPassword,
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Username => "Username",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single draft input. The input name is what the form reports on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DraftField {
    Username,
    Email,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl DraftField {
    pub fn input_name(self) -> &'static str {
        match self {
            DraftField::Username => "username",
            DraftField::Email => "email",
            DraftField::CurrentPassword => "currentPassword",
            DraftField::NewPassword => "newPassword",
            DraftField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(DraftField::Username),
            "email" => Some(DraftField::Email),
            "currentPassword" => Some(DraftField::CurrentPassword),
            "newPassword" => Some(DraftField::NewPassword),
            "confirmPassword" => Some(DraftField::ConfirmPassword),
            _ => None,
        }
    }

    pub fn owner(self) -> FieldKind {
        match self {
            DraftField::Username => FieldKind::Username,
            DraftField::Email => FieldKind::Email,
            DraftField::CurrentPassword | DraftField::NewPassword | DraftField::ConfirmPassword => {
                FieldKind::Password
            }
        }
    }

    pub fn is_secret(self) -> bool {
        self.owner() == FieldKind::Password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_draft_belongs_to_its_owner() {
        for kind in FieldKind::ALL {
            for draft in kind.drafts() {
                assert_eq!(draft.owner(), kind);
                assert_eq!(DraftField::from_input_name(draft.input_name()), Some(*draft));
            }
        }
    }

    #[test]
    fn test_unknown_input_name() {
        assert_eq!(DraftField::from_input_name("password"), None);
        assert_eq!(DraftField::from_input_name(""), None);
    }
}
