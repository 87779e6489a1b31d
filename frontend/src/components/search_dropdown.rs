use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use shared::search::{SearchDropdown as DropdownModel, SearchTicket};
use shared::services::SearchService;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::search::HttpSearchService;
use crate::config::Config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStore {
    pub dropdown: DropdownModel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchAction {
    Query(String),
    Results(SearchTicket, Result<Vec<String>, String>),
    Next,
    Prev,
    Open,
    Close,
    Clear,
}

impl Reducible for SearchStore {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut dropdown = self.dropdown.clone();
        match action {
            SearchAction::Query(raw) => {
                dropdown.set_query(&raw);
            }
            SearchAction::Results(ticket, result) => {
                if !dropdown.apply_results(ticket, result) {
                    return self;
                }
            }
            SearchAction::Next => dropdown.highlight_next(),
            SearchAction::Prev => dropdown.highlight_prev(),
            SearchAction::Open => dropdown.reopen(),
            SearchAction::Close => dropdown.close(),
            SearchAction::Clear => dropdown.clear(),
        }
        Rc::new(Self { dropdown })
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchDropdownProps {
    pub on_select: Callback<String>,
    #[prop_or(AttrValue::from("Search movies and news..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchDropdown)]
pub fn search_dropdown(props: &SearchDropdownProps) -> Html {
    let store = use_reducer(SearchStore::default);

    // Debounced request for the pending query; a newer ticket drops the old timeout
    {
        let store = store.clone();
        let pending = store.dropdown.pending();
        let query = store.dropdown.search_term().to_string();
        use_effect_with(pending, move |pending| {
            let timeout = pending.map(|ticket| {
                Timeout::new(Config::SEARCH_DEBOUNCE_MS, move || {
                    spawn_local(async move {
                        let result = HttpSearchService.search(&query).await;
                        store.dispatch(SearchAction::Results(ticket, result));
                    });
                })
            });
            move || drop(timeout)
        });
    }

    let on_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(SearchAction::Query(input.value()));
        })
    };

    let select = {
        let store = store.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |title: String| {
            debug!("Search selection: {}", title);
            store.dispatch(SearchAction::Clear);
            on_select.emit(title);
        })
    };

    let on_keydown = {
        let store = store.clone();
        let select = select.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowDown" => {
                e.prevent_default();
                store.dispatch(SearchAction::Next);
            }
            "ArrowUp" => {
                e.prevent_default();
                store.dispatch(SearchAction::Prev);
            }
            "Enter" => {
                if let Some(title) = store.dropdown.selected() {
                    e.prevent_default();
                    select.emit(title.to_string());
                }
            }
            "Escape" => store.dispatch(SearchAction::Close),
            _ => {}
        })
    };

    let on_focus = {
        let store = store.clone();
        Callback::from(move |_: FocusEvent| store.dispatch(SearchAction::Open))
    };

    let on_blur = {
        let store = store.clone();
        Callback::from(move |_: FocusEvent| store.dispatch(SearchAction::Close))
    };

    let dropdown = &store.dropdown;

    html! {
        <div class="relative w-full max-w-md">
            <input
                type="search"
                value={dropdown.query().to_string()}
                oninput={on_input}
                onkeydown={on_keydown}
                onfocus={on_focus}
                onblur={on_blur}
                placeholder={props.placeholder.clone()}
                aria-autocomplete="list"
                class="w-full px-3 py-2 rounded-md text-gray-900 border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500"
            />
            if dropdown.is_loading() {
                <span class="absolute right-3 top-2 text-xs text-gray-400">{"..."}</span>
            }
            if dropdown.is_open() {
                <ul class="absolute z-50 mt-1 w-full bg-white text-gray-900 rounded-md shadow-lg max-h-80 overflow-y-auto" role="listbox">
                    if let Some(error) = dropdown.error() {
                        <li class="px-3 py-2 text-sm text-red-600">{error}</li>
                    }
                    {dropdown.results().iter().enumerate().map(|(index, title)| {
                        let is_highlighted = dropdown.highlighted() == Some(index);
                        let select = select.clone();
                        let chosen = title.clone();
                        html! {
                            <li
                                key={index.to_string()}
                                role="option"
                                aria-selected={is_highlighted.to_string()}
                                // mousedown fires before the input's blur closes the list
                                onmousedown={Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    select.emit(chosen.clone());
                                })}
                                class={classes!(
                                    "px-3", "py-2", "text-sm", "cursor-pointer",
                                    if is_highlighted { classes!("bg-blue-100") } else { classes!("hover:bg-gray-100") }
                                )}
                            >
                                {title}
                            </li>
                        }
                    }).collect::<Html>()}
                </ul>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reduce(store: Rc<SearchStore>, action: SearchAction) -> Rc<SearchStore> {
        store.reduce(action)
    }

    #[test]
    fn test_stale_results_keep_same_state() {
        let store = Rc::new(SearchStore::default());
        let store = reduce(store, SearchAction::Query("dune".to_string()));
        let stale = store.dropdown.pending().unwrap();
        let store = reduce(store, SearchAction::Query("dune part".to_string()));

        let after = reduce(store.clone(), SearchAction::Results(stale, Ok(vec!["Dune".to_string()])));
        assert!(Rc::ptr_eq(&store, &after));
    }

    #[test]
    fn test_keyboard_selection() {
        let store = Rc::new(SearchStore::default());
        let store = reduce(store, SearchAction::Query("heat".to_string()));
        let ticket = store.dropdown.pending().unwrap();
        let store = reduce(
            store,
            SearchAction::Results(ticket, Ok(vec!["Heat".to_string(), "Heat 2".to_string()])),
        );
        let store = reduce(store, SearchAction::Next);
        let store = reduce(store, SearchAction::Next);
        assert_eq!(store.dropdown.selected(), Some("Heat 2"));

        let store = reduce(store, SearchAction::Clear);
        assert_eq!(store.dropdown.selected(), None);
        assert!(!store.dropdown.is_open());
    }
}
