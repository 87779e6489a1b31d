use std::rc::Rc;

use log::{debug, error};
use shared::services::SearchService;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::api::search::HttpSearchService;
use crate::components::news_heading::NewsHeading;

/// Results for the page's query. Only the latest request may fill it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub seq: u64,
    pub loading: bool,
    pub titles: Vec<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultsAction {
    Start(u64),
    Loaded(u64, Result<Vec<String>, String>),
}

impl Reducible for SearchResults {
    type Action = ResultsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ResultsAction::Start(seq) => Rc::new(Self {
                seq,
                loading: true,
                ..Self::default()
            }),
            ResultsAction::Loaded(seq, _) if seq != self.seq => {
                debug!("Dropping results of superseded search {}", seq);
                self
            }
            ResultsAction::Loaded(seq, Ok(titles)) => Rc::new(Self {
                seq,
                loading: false,
                titles,
                error: None,
            }),
            ResultsAction::Loaded(seq, Err(e)) => Rc::new(Self {
                seq,
                loading: false,
                titles: Vec::new(),
                error: Some(e),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub query: String,
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let results = use_reducer(SearchResults::default);
    let next_seq = use_mut_ref(|| 0u64);

    {
        let results = results.clone();
        use_effect_with(props.query.clone(), move |query| {
            let query = query.clone();
            let seq = {
                let mut next = next_seq.borrow_mut();
                *next += 1;
                *next
            };
            results.dispatch(ResultsAction::Start(seq));
            spawn_local(async move {
                debug!("Loading search page for {:?}", query);
                let found = HttpSearchService.search(&query).await;
                if let Err(e) = &found {
                    error!("Search failed: {}", e);
                }
                results.dispatch(ResultsAction::Loaded(seq, found));
            });
            || ()
        });
    }

    html! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <NewsHeading title={format!("Results for \"{}\"", props.query)} />
            if results.loading {
                <p class="text-gray-500">{"Searching..."}</p>
            } else if let Some(message) = &results.error {
                <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{message}</div>
            } else if results.titles.is_empty() {
                <p class="text-gray-500">{"Nothing matched."}</p>
            } else {
                <ul class="divide-y divide-gray-200 bg-white shadow rounded-lg">
                    {results.titles.iter().enumerate().map(|(index, title)| html! {
                        <li key={index.to_string()} class="px-4 py-3 text-gray-900">{title}</li>
                    }).collect::<Html>()}
                </ul>
            }
        </div>
    }
}
