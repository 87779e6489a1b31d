use crate::session::SessionContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoutButtonProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LogoutButton)]
pub fn logout_button(props: &LogoutButtonProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator();

    let on_logout_click = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    if session.state.user.is_none() {
        return html! {};
    }

    html! {
        <button
            onclick={on_logout_click}
            disabled={session.state.loading}
            class={classes!(
                "inline-flex", "items-center", "px-3", "py-1.5", "border",
                "border-transparent", "text-xs", "font-medium", "rounded-md",
                "text-blue-600", "bg-white", "hover:bg-blue-50", "disabled:opacity-50",
                "transition-colors", "duration-200", "min-h-[32px]", "active:scale-95",
                props.class.clone()
            )}
        >
            <span class="mr-1">{"↪"}</span>
            {if session.state.loading { "Signing out..." } else { "Logout" }}
        </button>
    }
}
