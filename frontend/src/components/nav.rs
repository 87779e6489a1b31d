use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::logout_button::LogoutButton;
use crate::components::search_dropdown::SearchDropdown;
use crate::session::SessionContext;
use crate::Route;

fn nav_link_classes(active: bool) -> Classes {
    classes!(
        "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
        "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
        if active {
            classes!("bg-white/20", "text-white")
        } else {
            classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
        }
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let on_search_select = Callback::from(move |query: String| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Search { query });
        }
    });

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center", "space-x-4")}>
                    // Left side - logo and main links
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <Link<Route> to={Route::Home} classes={classes!("active:scale-95")}>
                            <span class={classes!("text-lg", "sm:text-xl", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>
                                {"Reel"}
                            </span>
                        </Link<Route>>
                        <div class={classes!("hidden", "md:flex", "space-x-6")}>
                            <Link<Route> to={Route::Home} classes={nav_link_classes(current_route == Route::Home)}>
                                {"Home"}
                            </Link<Route>>
                            if session.state.user.is_some() {
                                <Link<Route> to={Route::Profile} classes={nav_link_classes(current_route == Route::Profile)}>
                                    {"Profile"}
                                </Link<Route>>
                            }
                        </div>
                    </div>

                    <div class={classes!("flex-1", "flex", "justify-center")}>
                        <SearchDropdown on_select={on_search_select} />
                    </div>

                    // Right side - session
                    <div class={classes!("flex", "items-center", "space-x-4")}>
                        if let Some(user) = &session.state.user {
                            <span class={classes!("hidden", "md:inline", "text-sm", "text-white/90")}>
                                {"Welcome, "}
                                <span class={classes!("font-medium", "text-white")}>{&user.username}</span>
                                if session.state.is_admin() {
                                    <span class={classes!("ml-2", "px-2", "py-1", "text-xs", "font-medium", "bg-yellow-400", "text-yellow-900", "rounded-full")}>
                                        {"Admin"}
                                    </span>
                                }
                            </span>
                        }
                        <LogoutButton />
                    </div>
                </div>
            </div>
        </nav>
    }
}
