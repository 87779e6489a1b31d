use yew::prelude::*;
use crate::components::profile::panel::ProfilePanel;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    html! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <ProfilePanel />
        </div>
    }
}
