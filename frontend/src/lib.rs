use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::nav::Nav;
use crate::session::{SessionContext, SessionProvider};

pub mod api;
pub mod components;
pub mod config;
pub mod session;
pub mod pages {
    pub mod home;
    pub mod not_found;
    pub mod profile;
    pub mod search;
}

use pages::{home::Home, not_found::NotFound, profile::ProfilePage, search::SearchPage};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[at("/search/:query")]
    Search { query: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <SessionProvider>
            <BrowserRouter>
                <div class="app-container">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only while someone is signed in
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let signed_in = session.state.user.is_some();
    let navigator = use_navigator();

    use_effect_with(signed_in, move |signed_in| {
        if !*signed_in {
            if let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        }
        || ()
    });

    if signed_in {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Profile => {
            debug!("Rendering Profile component (protected)");
            html! {
                <ProtectedRoute>
                    <ProfilePage />
                </ProtectedRoute>
            }
        },
        Route::Search { query } => {
            debug!("Rendering Search results for: {}", query);
            html! { <SearchPage query={query} /> }
        },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
