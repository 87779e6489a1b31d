use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};
use validator::Validate;

use super::field::{DraftField, FieldKind};
use super::session::{EditPhase, EditSession};
use super::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::dto::user::{UpdateEmailRequest, UpdateUsernameRequest, UserProfileDto};
use crate::error::{ExternalUpdateError, ProfileEditError, ValidationError};
use crate::services::ProfileService;

/// Identifies one submission. Completions carrying any other ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket {
    pub field: FieldKind,
    pub seq: u64,
}

/// A validated change, ready to hand to the account service
#[derive(Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Username(String),
    Email(String),
    Password { current: String, new: String },
}

// Keeps passwords out of the logs.
impl fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileUpdate::Username(username) => f.debug_tuple("Username").field(username).finish(),
            ProfileUpdate::Email(email) => f.debug_tuple("Email").field(email).finish(),
            ProfileUpdate::Password { .. } => f.write_str("Password { .. }"),
        }
    }
}

impl ProfileUpdate {
    pub fn field(&self) -> FieldKind {
        match self {
            ProfileUpdate::Username(_) => FieldKind::Username,
            ProfileUpdate::Email(_) => FieldKind::Email,
            ProfileUpdate::Password { .. } => FieldKind::Password,
        }
    }

    /// Calls the matching service operation
    pub async fn send<S>(&self, service: &S) -> Result<UpdateOutcome, String>
    where
        S: ProfileService + ?Sized,
    {
        match self {
            ProfileUpdate::Username(username) => service
                .update_username(username)
                .await
                .map(UpdateOutcome::Profile),
            ProfileUpdate::Email(email) => service.update_email(email).await.map(UpdateOutcome::Profile),
            ProfileUpdate::Password { current, new } => service
                .update_password(current, new)
                .await
                .map(|()| UpdateOutcome::PasswordChanged),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Profile(UserProfileDto),
    PasswordChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub ticket: SubmitTicket,
    pub update: ProfileUpdate,
}

/// What happened when a submission finished
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The session was closed. `profile` is the refreshed snapshot, if the service returned one.
    Saved {
        field: FieldKind,
        profile: Option<UserProfileDto>,
    },
    /// The session is back in Editing with its drafts intact.
    Failed {
        field: FieldKind,
        error: ExternalUpdateError,
    },
    /// Not the submission we were waiting for.
    Stale,
}

/// Edit-state machine for the username, email and password fields.
///
/// Each field kind has at most one [`EditSession`]. Sessions of different kinds are
/// independent, but only one submission may be in flight for the whole panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditController {
    sessions: BTreeMap<FieldKind, EditSession>,
    in_flight: Option<SubmitRequest>,
    next_seq: u64,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self, kind: FieldKind) -> Option<&EditSession> {
        self.sessions.get(&kind)
    }

    pub fn phase(&self, kind: FieldKind) -> EditPhase {
        self.sessions
            .get(&kind)
            .map(EditSession::phase)
            .unwrap_or(EditPhase::Viewing)
    }

    /// True while the field has a session, i.e. Editing or Submitting
    pub fn is_editing(&self, kind: FieldKind) -> bool {
        self.sessions.contains_key(&kind)
    }

    pub fn draft(&self, kind: FieldKind, field: DraftField) -> Option<&str> {
        if field.owner() != kind {
            return None;
        }
        self.sessions.get(&kind).and_then(|session| session.draft(field))
    }

    pub fn error(&self, kind: FieldKind) -> Option<&ProfileEditError> {
        self.sessions.get(&kind).and_then(EditSession::error)
    }

    /// An update started from this panel has not completed yet
    pub fn local_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&SubmitRequest> {
        self.in_flight.as_ref()
    }

    /// Viewing -> Editing. Returns false if the field already had a session,
    /// which is left untouched.
    pub fn start_edit(&mut self, kind: FieldKind, profile: &UserProfileDto) -> bool {
        if self.sessions.contains_key(&kind) {
            debug!("{} is already being edited", kind);
            return false;
        }
        debug!("Start editing {}", kind);
        self.sessions.insert(kind, EditSession::start(kind, profile));
        true
    }

    /// Editing -> Viewing, discarding drafts. No-op while Submitting or Viewing.
    pub fn cancel(&mut self, kind: FieldKind) -> bool {
        match self.phase(kind) {
            EditPhase::Editing => {
                debug!("Cancel editing {}", kind);
                self.sessions.remove(&kind);
                true
            }
            EditPhase::Submitting => {
                warn!("Ignoring cancel for {}: update in progress", kind);
                false
            }
            EditPhase::Viewing => false,
        }
    }

    /// Applies a keystroke to the draft named `input_name`, which must belong to `kind`
    pub fn update_draft(
        &mut self,
        kind: FieldKind,
        input_name: &str,
        value: impl Into<String>,
    ) -> Result<(), ProfileEditError> {
        let field = DraftField::from_input_name(input_name)
            .ok_or_else(|| ProfileEditError::UnknownInput(input_name.to_string()))?;
        if field.owner() != kind {
            return Err(ProfileEditError::ForeignInput {
                input: input_name.to_string(),
                field: kind,
            });
        }

        match self.sessions.get_mut(&kind) {
            Some(session) if session.phase() == EditPhase::Editing => {
                session.set_draft(field, value.into());
                Ok(())
            }
            _ => Err(ProfileEditError::NotEditing(kind)),
        }
    }

    /// Editing -> Submitting.
    ///
    /// Refused without side effects while `is_loading` or another panel submission is in
    /// flight. Drafts are validated first. A validation failure is recorded on the session,
    /// which stays in Editing, and nothing is sent.
    pub fn begin_submit(
        &mut self,
        kind: FieldKind,
        is_loading: bool,
        profile: &UserProfileDto,
    ) -> Result<SubmitRequest, ProfileEditError> {
        if is_loading || self.local_loading() {
            warn!("Ignoring submit for {}: an update is already in progress", kind);
            return Err(ProfileEditError::SubmissionInFlight);
        }

        let session = match self.sessions.get_mut(&kind) {
            Some(session) if session.phase() == EditPhase::Editing => session,
            _ => return Err(ProfileEditError::NotEditing(kind)),
        };

        let update = match validate_drafts(session, profile) {
            Ok(update) => update,
            Err(error) => {
                debug!("Rejected {} draft: {}", kind, error);
                let error = ProfileEditError::from(error);
                session.set_error(Some(error.clone()));
                return Err(error);
            }
        };

        session.set_phase(EditPhase::Submitting);
        session.set_error(None);

        self.next_seq += 1;
        let request = SubmitRequest {
            ticket: SubmitTicket {
                field: kind,
                seq: self.next_seq,
            },
            update,
        };
        debug!("Submitting {:?}", request.update);
        self.in_flight = Some(request.clone());
        Ok(request)
    }

    /// Submitting -> Viewing on success, Submitting -> Editing on failure
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<UpdateOutcome, String>,
    ) -> Completion {
        match &self.in_flight {
            Some(request) if request.ticket == ticket => {}
            _ => {
                debug!("Dropping result of stale submission {:?}", ticket);
                return Completion::Stale;
            }
        }
        self.in_flight = None;

        let field = ticket.field;
        match result {
            Ok(outcome) => {
                debug!("{} updated", field);
                self.sessions.remove(&field);
                let profile = match outcome {
                    UpdateOutcome::Profile(profile) => Some(profile),
                    UpdateOutcome::PasswordChanged => None,
                };
                Completion::Saved { field, profile }
            }
            Err(message) => {
                warn!("{} update failed: {}", field, message);
                let error = ExternalUpdateError(message);
                if let Some(session) = self.sessions.get_mut(&field) {
                    session.set_phase(EditPhase::Editing);
                    session.set_error(Some(error.clone().into()));
                }
                Completion::Failed { field, error }
            }
        }
    }

    /// Runs a whole submission against `service`: validate, call, apply the result
    pub async fn submit_with<S>(
        &mut self,
        kind: FieldKind,
        is_loading: bool,
        profile: &UserProfileDto,
        service: &S,
    ) -> Result<Completion, ProfileEditError>
    where
        S: ProfileService + ?Sized,
    {
        let request = self.begin_submit(kind, is_loading, profile)?;
        let result = request.update.send(service).await;
        Ok(self.complete_submit(request.ticket, result))
    }

    /// Drops every session. Used when the session owner goes away (logout).
    pub fn reset(&mut self) {
        self.sessions.clear();
        self.in_flight = None;
    }
}

fn validate_drafts(
    session: &EditSession,
    profile: &UserProfileDto,
) -> Result<ProfileUpdate, ValidationError> {
    match session.kind() {
        FieldKind::Username => {
            let username = session.draft_or_empty(DraftField::Username).trim();
            if username.is_empty() {
                return Err(ValidationError::EmptyField);
            }
            if username == profile.username {
                return Err(ValidationError::Unchanged);
            }
            let request = UpdateUsernameRequest {
                username: username.to_string(),
            };
            request
                .validate()
                .map_err(|_| ValidationError::InvalidUsername {
                    min: MIN_USERNAME_LENGTH,
                    max: MAX_USERNAME_LENGTH,
                })?;
            Ok(ProfileUpdate::Username(request.username))
        }
        FieldKind::Email => {
            let email = session.draft_or_empty(DraftField::Email).trim();
            if email.is_empty() {
                return Err(ValidationError::EmptyField);
            }
            if email.eq_ignore_ascii_case(&profile.email) {
                return Err(ValidationError::Unchanged);
            }
            let request = UpdateEmailRequest {
                email: email.to_string(),
            };
            request.validate().map_err(|_| ValidationError::InvalidEmail)?;
            Ok(ProfileUpdate::Email(request.email))
        }
        FieldKind::Password => {
            let current = session.draft_or_empty(DraftField::CurrentPassword);
            let new = session.draft_or_empty(DraftField::NewPassword);
            let confirm = session.draft_or_empty(DraftField::ConfirmPassword);
            if current.is_empty() || new.is_empty() || confirm.is_empty() {
                return Err(ValidationError::EmptyField);
            }
            if new != confirm {
                return Err(ValidationError::PasswordMismatch);
            }
            if new.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(ValidationError::PasswordTooShort {
                    min: MIN_PASSWORD_LENGTH,
                });
            }
            Ok(ProfileUpdate::Password {
                current: current.to_string(),
                new: new.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::user::Role;
    use async_trait::async_trait;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;

    fn alice() -> UserProfileDto {
        UserProfileDto {
            id: "user/1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::User,
            member_since: DateTime::parse_from_rfc3339("2020-05-01T12:00:00+00:00").unwrap(),
        }
    }

    // Mock account service for testing
    #[derive(Default)]
    struct RecordingService {
        calls: RefCell<Vec<ProfileUpdate>>,
        reject_with: Option<String>,
    }

    impl RecordingService {
        fn rejecting(message: &str) -> Self {
            Self {
                reject_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ProfileService for RecordingService {
        async fn update_username(&self, username: &str) -> Result<UserProfileDto, String> {
            self.calls
                .borrow_mut()
                .push(ProfileUpdate::Username(username.to_string()));
            match &self.reject_with {
                Some(message) => Err(message.clone()),
                None => Ok(UserProfileDto {
                    username: username.to_string(),
                    ..alice()
                }),
            }
        }

        async fn update_email(&self, email: &str) -> Result<UserProfileDto, String> {
            self.calls.borrow_mut().push(ProfileUpdate::Email(email.to_string()));
            match &self.reject_with {
                Some(message) => Err(message.clone()),
                None => Ok(UserProfileDto {
                    email: email.to_string(),
                    ..alice()
                }),
            }
        }

        async fn update_password(&self, current_password: &str, new_password: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(ProfileUpdate::Password {
                current: current_password.to_string(),
                new: new_password.to_string(),
            });
            match &self.reject_with {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        }
    }

    fn fill_password(controller: &mut EditController, current: &str, new: &str, confirm: &str) {
        controller
            .update_draft(FieldKind::Password, "currentPassword", current)
            .unwrap();
        controller
            .update_draft(FieldKind::Password, "newPassword", new)
            .unwrap();
        controller
            .update_draft(FieldKind::Password, "confirmPassword", confirm)
            .unwrap();
    }

    #[test]
    fn test_start_edit_seeds_drafts() {
        let mut controller = EditController::new();
        assert!(controller.start_edit(FieldKind::Username, &alice()));
        assert!(controller.start_edit(FieldKind::Password, &alice()));

        assert_eq!(controller.phase(FieldKind::Username), EditPhase::Editing);
        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), Some("alice"));
        for draft in FieldKind::Password.drafts() {
            assert_eq!(controller.draft(FieldKind::Password, *draft), Some(""));
        }
        assert_eq!(controller.phase(FieldKind::Email), EditPhase::Viewing);
    }

    #[test]
    fn test_start_edit_twice_keeps_drafts() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();

        assert!(!controller.start_edit(FieldKind::Username, &alice()));
        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), Some("bob"));
    }

    #[test]
    fn test_cancel_restores_displayed_value() {
        let profile = alice();
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &profile);
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();

        assert!(controller.cancel(FieldKind::Username));

        assert!(!controller.is_editing(FieldKind::Username));
        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), None);
        assert_eq!(profile.username, "alice");

        // A fresh edit starts from the persisted value again
        controller.start_edit(FieldKind::Username, &profile);
        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), Some("alice"));
    }

    #[rstest]
    #[case(FieldKind::Username)]
    #[case(FieldKind::Email)]
    #[case(FieldKind::Password)]
    fn test_cancel_returns_every_kind_to_viewing(#[case] kind: FieldKind) {
        let mut controller = EditController::new();
        controller.start_edit(kind, &alice());
        assert!(controller.cancel(kind));
        assert_eq!(controller.phase(kind), EditPhase::Viewing);
        assert!(!controller.cancel(kind));
    }

    #[test]
    fn test_cancel_is_noop_while_submitting() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();
        controller.begin_submit(FieldKind::Username, false, &alice()).unwrap();

        assert!(!controller.cancel(FieldKind::Username));
        assert_eq!(controller.phase(FieldKind::Username), EditPhase::Submitting);
    }

    #[test]
    fn test_draft_updates_are_keyed_by_input_name() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.start_edit(FieldKind::Password, &alice());

        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();
        controller.update_draft(FieldKind::Password, "newPassword", "hunter22").unwrap();

        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), Some("bob"));
        assert_eq!(controller.draft(FieldKind::Password, DraftField::NewPassword), Some("hunter22"));
        assert_eq!(controller.draft(FieldKind::Password, DraftField::CurrentPassword), Some(""));
        assert_eq!(controller.draft(FieldKind::Password, DraftField::ConfirmPassword), Some(""));
    }

    #[test]
    fn test_foreign_and_unknown_inputs_are_rejected() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());

        assert_eq!(
            controller.update_draft(FieldKind::Username, "newPassword", "x"),
            Err(ProfileEditError::ForeignInput {
                input: "newPassword".to_string(),
                field: FieldKind::Username,
            })
        );
        assert_eq!(
            controller.update_draft(FieldKind::Username, "nickname", "x"),
            Err(ProfileEditError::UnknownInput("nickname".to_string()))
        );
        assert_eq!(
            controller.update_draft(FieldKind::Email, "email", "x@example.com"),
            Err(ProfileEditError::NotEditing(FieldKind::Email))
        );
        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), Some("alice"));
    }

    #[tokio::test]
    async fn test_password_mismatch_never_reaches_service() {
        let service = RecordingService::default();
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Password, &alice());
        fill_password(&mut controller, "old-secret", "pass1", "pass2");

        let result = controller
            .submit_with(FieldKind::Password, false, &alice(), &service)
            .await;

        assert_eq!(
            result,
            Err(ProfileEditError::Validation(ValidationError::PasswordMismatch))
        );
        assert_eq!(service.call_count(), 0);
        assert_eq!(controller.phase(FieldKind::Password), EditPhase::Editing);
        assert_eq!(
            controller.error(FieldKind::Password),
            Some(&ProfileEditError::Validation(ValidationError::PasswordMismatch))
        );
        assert_eq!(controller.draft(FieldKind::Password, DraftField::NewPassword), Some("pass1"));
    }

    #[rstest]
    #[case("", "longenough", "longenough", ValidationError::EmptyField)]
    #[case("old", "", "", ValidationError::EmptyField)]
    #[case("old", "short", "short", ValidationError::PasswordTooShort { min: MIN_PASSWORD_LENGTH })]
    fn test_password_validation(
        #[case] current: &str,
        #[case] new: &str,
        #[case] confirm: &str,
        #[case] expected: ValidationError,
    ) {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Password, &alice());
        fill_password(&mut controller, current, new, confirm);

        let result = controller.begin_submit(FieldKind::Password, false, &alice());
        assert_eq!(result, Err(ProfileEditError::Validation(expected)));
        assert!(!controller.local_loading());
    }

    #[rstest]
    #[case("   ", ValidationError::EmptyField)]
    #[case("alice", ValidationError::Unchanged)]
    #[case("al", ValidationError::InvalidUsername { min: MIN_USERNAME_LENGTH, max: MAX_USERNAME_LENGTH })]
    #[case("bob smith", ValidationError::InvalidUsername { min: MIN_USERNAME_LENGTH, max: MAX_USERNAME_LENGTH })]
    fn test_username_validation(#[case] draft: &str, #[case] expected: ValidationError) {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", draft).unwrap();

        let result = controller.begin_submit(FieldKind::Username, false, &alice());
        assert_eq!(result, Err(ProfileEditError::Validation(expected)));
    }

    #[rstest]
    #[case("not-an-email", ValidationError::InvalidEmail)]
    #[case("ALICE@example.com", ValidationError::Unchanged)]
    fn test_email_validation(#[case] draft: &str, #[case] expected: ValidationError) {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Email, &alice());
        controller.update_draft(FieldKind::Email, "email", draft).unwrap();

        let result = controller.begin_submit(FieldKind::Email, false, &alice());
        assert_eq!(result, Err(ProfileEditError::Validation(expected)));
    }

    #[test]
    fn test_typing_clears_previous_error() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Password, &alice());
        fill_password(&mut controller, "old-secret", "pass1", "pass2");
        let _ = controller.begin_submit(FieldKind::Password, false, &alice());
        assert!(controller.error(FieldKind::Password).is_some());

        controller
            .update_draft(FieldKind::Password, "confirmPassword", "pass1")
            .unwrap();
        assert_eq!(controller.error(FieldKind::Password), None);
    }

    #[tokio::test]
    async fn test_no_second_call_while_loading() {
        let service = RecordingService::default();
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();

        let request = controller
            .begin_submit(FieldKind::Username, false, &alice())
            .unwrap();
        assert!(controller.local_loading());

        let again = controller
            .submit_with(FieldKind::Username, false, &alice(), &service)
            .await;
        assert_eq!(again, Err(ProfileEditError::SubmissionInFlight));
        assert_eq!(service.call_count(), 0);

        let result = request.update.send(&service).await;
        controller.complete_submit(request.ticket, result);
        assert_eq!(service.call_count(), 1);
        assert!(!controller.local_loading());
    }

    #[tokio::test]
    async fn test_global_loading_blocks_submit() {
        let service = RecordingService::default();
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();

        let result = controller
            .submit_with(FieldKind::Username, true, &alice(), &service)
            .await;

        assert_eq!(result, Err(ProfileEditError::SubmissionInFlight));
        assert_eq!(service.call_count(), 0);
        assert_eq!(controller.phase(FieldKind::Username), EditPhase::Editing);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_draft() {
        let service = RecordingService::rejecting("taken");
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();

        let completion = controller
            .submit_with(FieldKind::Username, false, &alice(), &service)
            .await
            .unwrap();

        assert_eq!(
            completion,
            Completion::Failed {
                field: FieldKind::Username,
                error: ExternalUpdateError("taken".to_string()),
            }
        );
        assert_eq!(controller.phase(FieldKind::Username), EditPhase::Editing);
        assert_eq!(controller.draft(FieldKind::Username, DraftField::Username), Some("bob"));
        assert_eq!(
            controller.error(FieldKind::Username).map(ToString::to_string),
            Some("Failed to update: taken".to_string())
        );
        assert!(!controller.local_loading());
    }

    #[tokio::test]
    async fn test_successful_update_returns_refreshed_profile() {
        let service = RecordingService::default();
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Email, &alice());
        controller
            .update_draft(FieldKind::Email, "email", " alice@new.example.com ")
            .unwrap();

        let completion = controller
            .submit_with(FieldKind::Email, false, &alice(), &service)
            .await
            .unwrap();

        match completion {
            Completion::Saved { field, profile } => {
                assert_eq!(field, FieldKind::Email);
                assert_eq!(profile.unwrap().email, "alice@new.example.com");
            }
            other => panic!("unexpected completion: {:?}", other),
        }
        assert!(!controller.is_editing(FieldKind::Email));
        assert_eq!(
            *service.calls.borrow(),
            vec![ProfileUpdate::Email("alice@new.example.com".to_string())]
        );
    }

    #[tokio::test]
    async fn test_password_change_success_closes_session() {
        let service = RecordingService::default();
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Password, &alice());
        fill_password(&mut controller, "old-secret", "new-secret", "new-secret");

        let completion = controller
            .submit_with(FieldKind::Password, false, &alice(), &service)
            .await
            .unwrap();

        assert_eq!(
            completion,
            Completion::Saved {
                field: FieldKind::Password,
                profile: None,
            }
        );
        assert_eq!(controller.phase(FieldKind::Password), EditPhase::Viewing);
    }

    #[tokio::test]
    async fn test_concurrent_edits_do_not_interfere() {
        let service = RecordingService::rejecting("taken");
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.start_edit(FieldKind::Password, &alice());
        fill_password(&mut controller, "old-secret", "new-secret", "new-sec");

        controller.update_draft(FieldKind::Username, "username", "b").unwrap();
        controller.update_draft(FieldKind::Username, "username", "bo").unwrap();
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();
        let _ = controller
            .submit_with(FieldKind::Username, false, &alice(), &service)
            .await;

        assert_eq!(controller.draft(FieldKind::Password, DraftField::CurrentPassword), Some("old-secret"));
        assert_eq!(controller.draft(FieldKind::Password, DraftField::NewPassword), Some("new-secret"));
        assert_eq!(controller.draft(FieldKind::Password, DraftField::ConfirmPassword), Some("new-sec"));
        assert_eq!(controller.error(FieldKind::Password), None);
        assert_eq!(controller.phase(FieldKind::Password), EditPhase::Editing);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();
        let request = controller
            .begin_submit(FieldKind::Username, false, &alice())
            .unwrap();

        let bogus = SubmitTicket {
            field: FieldKind::Username,
            seq: request.ticket.seq + 1,
        };
        assert_eq!(
            controller.complete_submit(bogus, Err("late".to_string())),
            Completion::Stale
        );
        assert_eq!(controller.phase(FieldKind::Username), EditPhase::Submitting);
        assert!(controller.local_loading());
    }

    #[test]
    fn test_password_update_debug_is_redacted() {
        let update = ProfileUpdate::Password {
            current: "old-secret".to_string(),
            new: "new-secret".to_string(),
        };
        let printed = format!("{:?}", update);
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut controller = EditController::new();
        controller.start_edit(FieldKind::Username, &alice());
        controller.update_draft(FieldKind::Username, "username", "bob").unwrap();
        controller.begin_submit(FieldKind::Username, false, &alice()).unwrap();

        controller.reset();
        assert!(!controller.local_loading());
        assert!(FieldKind::ALL.iter().all(|kind| !controller.is_editing(*kind)));
    }
}
