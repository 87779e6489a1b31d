use std::rc::Rc;

use log::{debug, warn};
use shared::profile::{
    Completion, EditController, FieldKind, PanelState, ProfileTab, SubmitRequest, SubmitTicket,
    TabDescriptor, UpdateOutcome,
};
use shared::services::ProfileService;
use shared::UserProfileDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::profile::HttpProfileService;
use crate::components::profile::field_editor::FieldAction;
use crate::components::profile::info_tab::InfoTab;
use crate::components::profile::notifications_tab::{Notification, NotificationSettings, NotificationsTab};
use crate::components::profile::preferences_tab::{ContentPreference, DisplayPreferences, PreferencesTab};
use crate::components::profile::security_tab::SecurityTab;
use crate::components::tab_selector::TabSelector;
use crate::session::SessionContext;

/// Account service the panel submits to. Defaults to the HTTP API.
#[derive(Clone)]
pub struct ProfileServiceHandle(pub Rc<dyn ProfileService>);

impl ProfileServiceHandle {
    pub fn new(service: impl ProfileService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl Default for ProfileServiceHandle {
    fn default() -> Self {
        Self::new(HttpProfileService)
    }
}

impl PartialEq for ProfileServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Notification and display choices. Held in memory for the panel's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalSettings {
    pub notifications: NotificationSettings,
    pub display: DisplayPreferences,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsChange {
    ToggleNotification(Notification),
    Content(ContentPreference),
    ItemsPerPage(u32),
}

impl LocalSettings {
    pub fn apply(&self, change: SettingsChange) -> Self {
        match change {
            SettingsChange::ToggleNotification(notification) => Self {
                notifications: self.notifications.toggled(notification),
                ..self.clone()
            },
            SettingsChange::Content(content) => Self {
                display: DisplayPreferences {
                    content,
                    ..self.display.clone()
                },
                ..self.clone()
            },
            SettingsChange::ItemsPerPage(items) => Self {
                display: self.display.with_items_per_page(items),
                ..self.clone()
            },
        }
    }
}

/// Reducer state behind the profile panel
#[derive(Clone, Debug, PartialEq)]
pub struct PanelStore {
    pub panel: PanelState,
    pub settings: LocalSettings,
    /// Confirmation shown after the last successful update
    pub notice: Option<String>,
}

impl PanelStore {
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            panel: PanelState::new(tabs),
            settings: LocalSettings::default(),
            notice: None,
        }
    }
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new(ProfileTab::descriptors())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelAction {
    SelectTab(String),
    StartEdit {
        field: FieldKind,
        profile: UserProfileDto,
    },
    Input {
        field: FieldKind,
        name: String,
        value: String,
    },
    Submit {
        field: FieldKind,
        profile: UserProfileDto,
        is_loading: bool,
    },
    Cancel(FieldKind),
    Complete {
        ticket: SubmitTicket,
        result: Result<UpdateOutcome, String>,
    },
    Settings(SettingsChange),
    Reset,
}

impl PanelAction {
    /// Attaches the current snapshot and loading flag to a field editor's intent
    pub fn from_field_action(action: FieldAction, profile: &UserProfileDto, is_loading: bool) -> Self {
        match action {
            FieldAction::StartEdit(field) => PanelAction::StartEdit {
                field,
                profile: profile.clone(),
            },
            FieldAction::Input { field, name, value } => PanelAction::Input { field, name, value },
            FieldAction::Submit(field) => PanelAction::Submit {
                field,
                profile: profile.clone(),
                is_loading,
            },
            FieldAction::Cancel(field) => PanelAction::Cancel(field),
        }
    }
}

impl Reducible for PanelStore {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PanelAction::SelectTab(id) => {
                if next.panel.select_tab(&id).is_err() {
                    return self;
                }
            }
            PanelAction::StartEdit { field, profile } => {
                next.panel.edits.start_edit(field, &profile);
                next.notice = None;
            }
            PanelAction::Input { field, name, value } => {
                if let Err(e) = next.panel.edits.update_draft(field, &name, value) {
                    warn!("Dropped input for {}: {}", field, e);
                    return self;
                }
            }
            PanelAction::Submit {
                field,
                profile,
                is_loading,
            } => {
                next.panel.is_loading = is_loading;
                if let Err(e) = next.panel.edits.begin_submit(field, is_loading, &profile) {
                    debug!("Submit for {} not started: {}", field, e);
                    // Validation errors are recorded on the session and must still render
                    if !e.is_field_error() {
                        return self;
                    }
                }
                next.notice = None;
            }
            PanelAction::Cancel(field) => {
                if !next.panel.edits.cancel(field) {
                    return self;
                }
            }
            PanelAction::Complete { ticket, result } => match next.panel.edits.complete_submit(ticket, result) {
                Completion::Saved { field, .. } => {
                    next.notice = Some(format!("{} updated successfully", field));
                }
                Completion::Failed { .. } => {}
                Completion::Stale => return self,
            },
            PanelAction::Settings(change) => {
                next.settings = next.settings.apply(change);
            }
            PanelAction::Reset => {
                next.panel.edits.reset();
                next.settings = LocalSettings::default();
                next.notice = None;
            }
        }
        Rc::new(next)
    }
}

/// What every tab view renders from
#[derive(Properties, Clone, PartialEq)]
pub struct TabViewProps {
    pub user: UserProfileDto,
    pub edits: EditController,
    pub is_loading: bool,
    pub local_loading: bool,
    pub on_action: Callback<FieldAction>,
    pub settings: LocalSettings,
    pub on_settings: Callback<SettingsChange>,
}

impl TabViewProps {
    pub fn busy(&self) -> bool {
        self.is_loading || self.local_loading
    }
}

/// Sends an accepted submission, then reports the completion to the panel and only
/// afterwards hands a returned profile to the session.
pub async fn run_submission<S>(
    request: SubmitRequest,
    service: &S,
    complete: &Callback<PanelAction>,
    update_user: &Callback<UserProfileDto>,
) where
    S: ProfileService + ?Sized,
{
    let result = request.update.send(service).await;
    let refreshed = match &result {
        Ok(UpdateOutcome::Profile(user)) => Some(user.clone()),
        _ => None,
    };
    complete.emit(PanelAction::Complete {
        ticket: request.ticket,
        result,
    });
    if let Some(user) = refreshed {
        update_user.emit(user);
    }
}

/// Maps the active tab to its content view
fn render_tab(tab: Option<ProfileTab>, view: TabViewProps) -> Html {
    match tab {
        Some(ProfileTab::Info) => html! { <InfoTab ..view /> },
        Some(ProfileTab::Security) => html! { <SecurityTab ..view /> },
        Some(ProfileTab::Notifications) => html! { <NotificationsTab ..view /> },
        Some(ProfileTab::Preferences) => html! { <PreferencesTab ..view /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfilePanelProps {
    #[prop_or_else(ProfileTab::descriptors)]
    pub tabs: Vec<TabDescriptor>,
    #[prop_or_default]
    pub service: ProfileServiceHandle,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(props: &ProfilePanelProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let store = {
        let tabs = props.tabs.clone();
        use_reducer(move || PanelStore::new(tabs))
    };

    // Run the submission the reducer accepted, once per ticket
    {
        let request = store.panel.edits.in_flight().cloned();
        let ticket = request.as_ref().map(|request| request.ticket);
        let service = props.service.clone();
        let update_user = session.update_user.clone();
        let complete = {
            let store = store.clone();
            Callback::from(move |action: PanelAction| store.dispatch(action))
        };
        use_effect_with(ticket, move |_| {
            if let Some(request) = request {
                spawn_local(async move {
                    run_submission(request, service.0.as_ref(), &complete, &update_user).await;
                });
            }
            || ()
        });
    }

    // Logout tears down any edit in progress
    {
        let store = store.clone();
        let signed_in = session.state.user.is_some();
        use_effect_with(signed_in, move |signed_in| {
            if !*signed_in {
                store.dispatch(PanelAction::Reset);
            }
            || ()
        });
    }

    let on_select = {
        let store = store.clone();
        Callback::from(move |id: String| store.dispatch(PanelAction::SelectTab(id)))
    };

    let Some(user) = session.state.user.clone() else {
        return html! { <div class="text-red-500">{"Not signed in"}</div> };
    };

    let is_loading = session.state.loading;
    let on_action = {
        let store = store.clone();
        let user = user.clone();
        Callback::from(move |action: FieldAction| {
            store.dispatch(PanelAction::from_field_action(action, &user, is_loading));
        })
    };

    let view = TabViewProps {
        user,
        edits: store.panel.edits.clone(),
        is_loading,
        local_loading: store.panel.local_loading(),
        on_action,
        settings: store.settings.clone(),
        on_settings: {
            let store = store.clone();
            Callback::from(move |change: SettingsChange| store.dispatch(PanelAction::Settings(change)))
        },
    };

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Profile Settings"}</h2>
            <TabSelector
                tabs={store.panel.tabs().to_vec()}
                active_tab_id={store.panel.active_tab_id().to_string()}
                {on_select}
            />
            if let Some(notice) = &store.notice {
                <div class="mt-4 p-4 bg-green-100 border border-green-400 text-green-700 rounded">
                    {notice}
                </div>
            }
            <div class="mt-6">
                {render_tab(store.panel.active_tab(), view)}
            </div>
        </div>
    }
}
