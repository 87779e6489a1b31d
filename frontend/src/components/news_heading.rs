use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewsHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Where the "See all" link points, if anywhere
    #[prop_or_default]
    pub see_all: Option<Route>,
}

#[function_component(NewsHeading)]
pub fn news_heading(props: &NewsHeadingProps) -> Html {
    html! {
        <div class="flex items-end justify-between border-b border-gray-200 pb-2 mb-4">
            <div>
                <h2 class="text-xl sm:text-2xl font-bold text-gray-900">{props.title.to_string()}</h2>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-gray-500 mt-1">{subtitle.to_string()}</p>
                }
            </div>
            if let Some(route) = &props.see_all {
                <Link<Route> to={route.clone()} classes={classes!("text-sm", "font-medium", "text-blue-600", "hover:text-blue-800")}>
                    {"See all →"}
                </Link<Route>>
            }
        </div>
    }
}
