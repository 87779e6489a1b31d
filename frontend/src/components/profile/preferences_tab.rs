use yew::prelude::*;

use crate::components::profile::panel::{SettingsChange, TabViewProps};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentPreference {
    Movies,
    News,
    #[default]
    Both,
}

impl ContentPreference {
    pub const ALL: [ContentPreference; 3] = [
        ContentPreference::Movies,
        ContentPreference::News,
        ContentPreference::Both,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ContentPreference::Movies => "movies",
            ContentPreference::News => "news",
            ContentPreference::Both => "both",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.id() == id)
    }

    fn label(self) -> &'static str {
        match self {
            ContentPreference::Movies => "Movies",
            ContentPreference::News => "News",
            ContentPreference::Both => "Movies and news",
        }
    }
}

pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPreferences {
    pub content: ContentPreference,
    pub items_per_page: u32,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            content: ContentPreference::default(),
            items_per_page: PAGE_SIZES[1],
        }
    }
}

impl DisplayPreferences {
    /// Falls back to the default page size for values not offered in the picker
    pub fn with_items_per_page(&self, items: u32) -> Self {
        let items_per_page = if PAGE_SIZES.contains(&items) {
            items
        } else {
            Self::default().items_per_page
        };
        Self {
            items_per_page,
            ..self.clone()
        }
    }
}

#[function_component(PreferencesTab)]
pub fn preferences_tab(props: &TabViewProps) -> Html {
    let prefs = &props.settings.display;

    let on_content_change = {
        let on_settings = props.on_settings.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(change) = ContentPreference::from_id(&select.value()).map(SettingsChange::Content) {
                on_settings.emit(change);
            }
        })
    };

    let on_page_size_change = props.on_settings.reform(|e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        SettingsChange::ItemsPerPage(select.value().parse().unwrap_or_default())
    });

    html! {
        <div class="space-y-6">
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Show me"}</label>
                <select onchange={on_content_change} class="w-full px-3 py-2 border border-gray-300 rounded-md">
                    {ContentPreference::ALL.iter().map(|pref| html! {
                        <option key={pref.id()} value={pref.id()} selected={*pref == prefs.content}>
                            {pref.label()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Items per page"}</label>
                <select onchange={on_page_size_change} class="w-full px-3 py-2 border border-gray-300 rounded-md">
                    {PAGE_SIZES.iter().map(|size| html! {
                        <option key={size.to_string()} value={size.to_string()} selected={*size == prefs.items_per_page}>
                            {size.to_string()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </div>
        </div>
    }
}
