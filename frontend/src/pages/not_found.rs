use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page max-w-4xl mx-auto px-4 py-16 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-6">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("text-blue-600", "hover:text-blue-800")}>
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
