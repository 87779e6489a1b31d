use std::collections::BTreeMap;

use super::field::{DraftField, FieldKind};
use crate::dto::user::UserProfileDto;
use crate::error::ProfileEditError;

/// Where a field currently is in its edit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditPhase {
    Viewing,
    Editing,
    Submitting,
}

/// Transient edit state of one field kind.
///
/// A session only exists while its field is Editing or Submitting. Viewing is the
/// absence of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    kind: FieldKind,
    phase: EditPhase,
    drafts: BTreeMap<DraftField, String>,
    error: Option<ProfileEditError>,
}

impl EditSession {
    /// Opens a session with drafts seeded from the profile. Password drafts start empty.
    pub fn start(kind: FieldKind, profile: &UserProfileDto) -> Self {
        let drafts = kind
            .drafts()
            .iter()
            .map(|draft| {
                let seed = match draft {
                    DraftField::Username => profile.username.clone(),
                    DraftField::Email => profile.email.clone(),
                    _ => String::new(),
                };
                (*draft, seed)
            })
            .collect();

        Self {
            kind,
            phase: EditPhase::Editing,
            drafts,
            error: None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn draft(&self, field: DraftField) -> Option<&str> {
        self.drafts.get(&field).map(String::as_str)
    }

    pub fn error(&self) -> Option<&ProfileEditError> {
        self.error.as_ref()
    }

    pub(crate) fn draft_or_empty(&self, field: DraftField) -> &str {
        self.draft(field).unwrap_or_default()
    }

    pub(crate) fn set_draft(&mut self, field: DraftField, value: String) {
        debug_assert_eq!(field.owner(), self.kind);
        self.drafts.insert(field, value);
        self.error = None;
    }

    pub(crate) fn set_phase(&mut self, phase: EditPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_error(&mut self, error: Option<ProfileEditError>) {
        self.error = error;
    }
}
