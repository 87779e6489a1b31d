use shared::profile::TabDescriptor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabSelectorProps {
    pub tabs: Vec<TabDescriptor>,
    pub active_tab_id: AttrValue,
    pub on_select: Callback<String>,
}

/// Stateless tab strip. Highlight follows `active_tab_id`; the parent owns selection.
#[function_component(TabSelector)]
pub fn tab_selector(props: &TabSelectorProps) -> Html {
    html! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex space-x-8" role="tablist">
                {props.tabs.iter().map(|tab| {
                    let is_active = props.active_tab_id.as_str() == tab.id;
                    let on_select = props.on_select.clone();
                    let id = tab.id.clone();

                    html! {
                        <button
                            key={tab.id.clone()}
                            role="tab"
                            aria-selected={is_active.to_string()}
                            data-tab-id={tab.id.clone()}
                            class={classes!(
                                "py-2", "px-1", "border-b-2", "font-medium", "text-sm",
                                if is_active {
                                    classes!("border-blue-500", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                }
                            )}
                            onclick={Callback::from(move |_| on_select.emit(id.clone()))}
                        >
                            if let Some(icon) = &tab.icon {
                                <span class="mr-2">{icon}</span>
                            }
                            {&tab.label}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}
