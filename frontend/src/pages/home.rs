use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::news_heading::NewsHeading;
use crate::session::SessionContext;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");

    html! {
        <div class="home-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-12">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-gray-900 mb-6">
                        <span class="bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                            {"Movies and the news around them"}
                        </span>
                    </h1>
                    if let Some(user) = &session.state.user {
                        <p class="text-lg text-gray-600">
                            {format!("Good to see you again, {}. ", user.username)}
                            <Link<Route> to={Route::Profile} classes={classes!("text-blue-600", "hover:text-blue-800")}>
                                {"Manage your profile"}
                            </Link<Route>>
                        </p>
                    } else {
                        <p class="text-lg text-gray-600">{"Use the search bar to find a title."}</p>
                    }
                </div>

                <section>
                    <NewsHeading title="Latest News" subtitle="What's happening in film this week" />
                    <p class="text-gray-500">{"No stories yet."}</p>
                </section>

                <section>
                    <NewsHeading title="New Releases" />
                    <p class="text-gray-500">{"Search for a title to see what's out."}</p>
                </section>
            </div>
        </div>
    }
}
