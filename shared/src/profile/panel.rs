use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::controller::EditController;
use crate::error::ProfileEditError;

/// One entry of a tab strip. Static for the lifetime of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Content views of the profile settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileTab {
    Info,
    Security,
    Notifications,
    Preferences,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Info,
        ProfileTab::Security,
        ProfileTab::Notifications,
        ProfileTab::Preferences,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProfileTab::Info => "info",
            ProfileTab::Security => "security",
            ProfileTab::Notifications => "notifications",
            ProfileTab::Preferences => "preferences",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn descriptor(self) -> TabDescriptor {
        let (label, icon) = match self {
            ProfileTab::Info => ("Profile Info", "👤"),
            ProfileTab::Security => ("Security", "🔒"),
            ProfileTab::Notifications => ("Notifications", "🔔"),
            ProfileTab::Preferences => ("Preferences", "⚙️"),
        };
        TabDescriptor::new(self.id(), label).with_icon(icon)
    }

    /// The default tab strip of the profile page
    pub fn descriptors() -> Vec<TabDescriptor> {
        Self::ALL.into_iter().map(ProfileTab::descriptor).collect()
    }
}

/// State owned by the profile panel.
///
/// Edit sessions are keyed by field kind, not by tab, so switching tabs leaves any
/// edit in progress as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    tabs: Vec<TabDescriptor>,
    active_tab_id: String,
    /// Global in-flight flag, owned by the session context
    pub is_loading: bool,
    pub edits: EditController,
}

impl PanelState {
    /// Builds a panel over `tabs`, activating the first one. Later duplicates of an id are dropped.
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        let mut unique: Vec<TabDescriptor> = Vec::with_capacity(tabs.len());
        for tab in tabs {
            if unique.iter().any(|existing| existing.id == tab.id) {
                warn!("Dropping duplicate tab id {}", tab.id);
                continue;
            }
            unique.push(tab);
        }

        let active_tab_id = unique.first().map(|tab| tab.id.clone()).unwrap_or_default();
        Self {
            tabs: unique,
            active_tab_id,
            is_loading: false,
            edits: EditController::new(),
        }
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    /// The active tab as a profile view, if its id names one
    pub fn active_tab(&self) -> Option<ProfileTab> {
        ProfileTab::from_id(&self.active_tab_id)
    }

    pub fn local_loading(&self) -> bool {
        self.edits.local_loading()
    }

    /// Makes `id` the active tab. Unknown ids are rejected and change nothing.
    pub fn select_tab(&mut self, id: &str) -> Result<(), ProfileEditError> {
        if !self.tabs.iter().any(|tab| tab.id == id) {
            warn!("Ignoring selection of unknown tab {}", id);
            return Err(ProfileEditError::UnknownTab(id.to_string()));
        }
        debug!("Switching to tab {}", id);
        self.active_tab_id = id.to_string();
        Ok(())
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(ProfileTab::descriptors())
    }
}
