use yew::prelude::*;

use crate::components::profile::panel::{SettingsChange, TabViewProps};

/// Which emails the user wants
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationSettings {
    pub newsletter: bool,
    pub new_releases: bool,
    pub comment_replies: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            newsletter: true,
            new_releases: true,
            comment_replies: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notification {
    Newsletter,
    NewReleases,
    CommentReplies,
}

impl Notification {
    const ALL: [Notification; 3] = [
        Notification::Newsletter,
        Notification::NewReleases,
        Notification::CommentReplies,
    ];

    fn label(self) -> &'static str {
        match self {
            Notification::Newsletter => "Weekly newsletter",
            Notification::NewReleases => "New release alerts",
            Notification::CommentReplies => "Replies to my comments",
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, notification: Notification) -> bool {
        match notification {
            Notification::Newsletter => self.newsletter,
            Notification::NewReleases => self.new_releases,
            Notification::CommentReplies => self.comment_replies,
        }
    }

    pub fn toggled(&self, notification: Notification) -> Self {
        let mut next = self.clone();
        match notification {
            Notification::Newsletter => next.newsletter = !next.newsletter,
            Notification::NewReleases => next.new_releases = !next.new_releases,
            Notification::CommentReplies => next.comment_replies = !next.comment_replies,
        }
        next
    }
}

#[function_component(NotificationsTab)]
pub fn notifications_tab(props: &TabViewProps) -> Html {
    let settings = &props.settings.notifications;

    html! {
        <div class="space-y-4">
            <h3 class="text-lg font-semibold text-gray-700">{"Email Notifications"}</h3>
            {Notification::ALL.iter().map(|notification| {
                let notification = *notification;
                let onchange = props
                    .on_settings
                    .reform(move |_: Event| SettingsChange::ToggleNotification(notification));
                html! {
                    <label key={notification.label()} class="flex items-center justify-between py-2">
                        <span class="text-gray-900">{notification.label()}</span>
                        <input
                            type="checkbox"
                            checked={settings.get(notification)}
                            {onchange}
                            class="h-4 w-4 text-blue-600"
                        />
                    </label>
                }
            }).collect::<Html>()}
        </div>
    }
}
