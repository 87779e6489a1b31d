use shared::UserProfileDto;
use log::{debug, error, warn};
use yew::prelude::*;
use yew::functional::use_reducer_eq;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_futures::spawn_local;
use crate::api::auth;
use crate::config::Config;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfileDto>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(UserProfileDto::is_admin).unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Logout,
    LogoutFinished(Result<(), String>),
    /// Authoritative profile from the account service
    SetUser(UserProfileDto),
    /// Profile returned by an update. Ignored unless the same user is still signed in.
    UpdateUser(UserProfileDto),
    RefreshFailed(String),
}

/// What a transition asks of the stored session snapshot
#[derive(Clone, Debug, PartialEq)]
pub enum StorageEffect {
    Store(UserProfileDto),
    Clear,
}

impl SessionState {
    /// Computes the next state without touching storage
    pub fn apply(&self, action: SessionAction) -> (SessionState, Option<StorageEffect>) {
        match action {
            SessionAction::Logout => (
                Self {
                    loading: true,
                    error: None,
                    ..self.clone()
                },
                None,
            ),
            // The local session is torn down whatever the server said
            SessionAction::LogoutFinished(result) => (
                Self {
                    user: None,
                    loading: false,
                    error: result.err(),
                },
                Some(StorageEffect::Clear),
            ),
            SessionAction::SetUser(user) => (
                Self {
                    user: Some(user.clone()),
                    error: None,
                    ..self.clone()
                },
                Some(StorageEffect::Store(user)),
            ),
            SessionAction::UpdateUser(user) => {
                let same_user = self.user.as_ref().is_some_and(|current| current.id == user.id);
                if !same_user || self.loading {
                    debug!("Ignoring profile update for {}: not the signed-in session", user.id);
                    return (self.clone(), None);
                }
                self.apply(SessionAction::SetUser(user))
            }
            SessionAction::RefreshFailed(error) => {
                if error.contains("Session expired") {
                    return (
                        Self {
                            user: None,
                            loading: false,
                            error: Some("Session expired. Please sign in again.".to_string()),
                        },
                        Some(StorageEffect::Clear),
                    );
                }
                (
                    Self {
                        error: Some(error),
                        ..self.clone()
                    },
                    None,
                )
            }
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (next, effect) = self.apply(action);
        match effect {
            Some(StorageEffect::Store(user)) => {
                if let Err(e) = LocalStorage::set(Config::USER_STORAGE_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
            }
            Some(StorageEffect::Clear) => clear_stored_session(),
            None => {}
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

fn clear_stored_session() {
    LocalStorage::delete(Config::USER_STORAGE_KEY);
    LocalStorage::delete(Config::SESSION_STORAGE_KEY);
}

/// Reads the stored profile snapshot, discarding it if it no longer validates
fn restore_user() -> Option<UserProfileDto> {
    let user = LocalStorage::get::<UserProfileDto>(Config::USER_STORAGE_KEY).ok()?;
    match user.validated() {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Discarding stored user: {}", e);
            None
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Current session handed to components explicitly through context
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub logout: Callback<()>,
    pub refresh: Callback<()>,
    /// Applies a profile returned by an update to the signed-in user
    pub update_user: Callback<UserProfileDto>,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(|| SessionState {
        user: restore_user(),
        ..Default::default()
    });

    // Handle logout
    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let session = session.clone();
            spawn_local(async move {
                session.dispatch(SessionAction::Logout);
                let result = auth::logout().await;
                if let Err(e) = &result {
                    warn!("{}", e);
                }
                session.dispatch(SessionAction::LogoutFinished(result));
            });
        })
    };

    // Handle refresh
    let refresh = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let session = session.clone();
            spawn_local(async move {
                match auth::get_current_user().await {
                    Ok(user) => session.dispatch(SessionAction::SetUser(user)),
                    Err(e) => {
                        error!("Failed to refresh user data: {}", e);
                        session.dispatch(SessionAction::RefreshFailed(e));
                    }
                }
            });
        })
    };

    let update_user = {
        let session = session.clone();
        Callback::from(move |user: UserProfileDto| session.dispatch(SessionAction::UpdateUser(user)))
    };

    // Revalidate a restored session once on mount
    {
        let refresh = refresh.clone();
        let has_user = session.user.is_some();
        use_effect_with((), move |_| {
            if has_user {
                refresh.emit(());
            }
            || ()
        });
    }

    let context = SessionContext {
        state: (*session).clone(),
        logout,
        refresh,
        update_user,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
