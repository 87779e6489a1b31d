pub mod logout_button;
pub mod nav;
pub mod news_heading;
pub mod search_dropdown;
pub mod tab_selector;
pub mod profile {
    pub mod field_editor;
    pub mod info_tab;
    pub mod notifications_tab;
    pub mod panel;
    pub mod preferences_tab;
    pub mod security_tab;
}
