use std::rc::Rc;

use frontend::components::profile::field_editor::FieldAction;
use frontend::components::profile::panel::{PanelAction, PanelStore};
use frontend::components::search_dropdown::{SearchAction, SearchStore};
use frontend::Route;
use pretty_assertions::assert_eq;
use shared::profile::{FieldKind, TabDescriptor};
use shared::UserProfileDto;
use yew::Reducible;
use yew_router::Routable;

fn user() -> UserProfileDto {
    serde_json::from_str(
        r#"{
            "id": "user/7",
            "username": "carol",
            "email": "carol@example.com",
            "memberSince": "2019-06-01T00:00:00+02:00"
        }"#,
    )
    .unwrap()
}

#[test]
fn test_field_action_carries_snapshot_and_loading_flag() {
    let action = PanelAction::from_field_action(FieldAction::Submit(FieldKind::Email), &user(), true);
    assert_eq!(
        action,
        PanelAction::Submit {
            field: FieldKind::Email,
            profile: user(),
            is_loading: true,
        }
    );

    let action = PanelAction::from_field_action(FieldAction::Cancel(FieldKind::Password), &user(), false);
    assert_eq!(action, PanelAction::Cancel(FieldKind::Password));
}

#[test]
fn test_custom_tab_set_starts_on_first_tab() {
    let tabs = vec![
        TabDescriptor::new("security", "Security"),
        TabDescriptor::new("info", "Profile Info"),
    ];
    let store = Rc::new(PanelStore::new(tabs));
    assert_eq!(store.panel.active_tab_id(), "security");

    let store = store.reduce(PanelAction::SelectTab("notifications".to_string()));
    assert_eq!(store.panel.active_tab_id(), "security");
}

#[test]
fn test_search_short_query_does_not_load() {
    let store = Rc::new(SearchStore::default());
    let store = store.reduce(SearchAction::Query("a".to_string()));
    assert_eq!(store.dropdown.pending(), None);
    assert!(!store.dropdown.is_open());
}

#[test]
fn test_routes() {
    assert_eq!(Route::recognize("/profile"), Some(Route::Profile));
    assert_eq!(
        Route::recognize("/search/blade"),
        Some(Route::Search { query: "blade".to_string() })
    );
    assert_eq!(Route::Search { query: "heat".to_string() }.to_path(), "/search/heat");
}

#[cfg(target_arch = "wasm32")]
mod render {
    use std::time::Duration;

    use frontend::components::news_heading::{NewsHeading, NewsHeadingProps};
    use frontend::components::tab_selector::{TabSelector, TabSelectorProps};
    use shared::profile::ProfileTab;
    use wasm_bindgen_test::*;
    use yew::prelude::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_point() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn test_tab_selector_highlights_active_tab() {
        let root = mount_point();
        let props = TabSelectorProps {
            tabs: ProfileTab::descriptors(),
            active_tab_id: AttrValue::from("security"),
            on_select: Callback::noop(),
        };
        yew::Renderer::<TabSelector>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let tabs = root.query_selector_all("[role='tab']").unwrap();
        assert_eq!(tabs.length(), 4);
        let active = root.query_selector("[aria-selected='true']").unwrap().unwrap();
        assert_eq!(active.get_attribute("data-tab-id").as_deref(), Some("security"));
    }

    #[wasm_bindgen_test]
    async fn test_news_heading_without_link() {
        let root = mount_point();
        let props = NewsHeadingProps {
            title: AttrValue::from("Latest News"),
            subtitle: Some(AttrValue::from("This week")),
            see_all: None,
        };
        yew::Renderer::<NewsHeading>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Latest News"));
        assert!(text.contains("This week"));
        assert!(root.query_selector("a").unwrap().is_none());
    }
}
