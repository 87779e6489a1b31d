use shared::profile::FieldKind;
use shared::Role;
use yew::prelude::*;

use crate::components::profile::field_editor::FieldEditor;
use crate::components::profile::panel::TabViewProps;

fn role_badge_class(role: Role) -> Classes {
    match role {
        Role::Admin => classes!("bg-red-100", "text-red-800"),
        Role::Publisher => classes!("bg-purple-100", "text-purple-800"),
        Role::User => classes!("bg-blue-100", "text-blue-800"),
        Role::Unlabeled => classes!(),
    }
}

#[function_component(InfoTab)]
pub fn info_tab(props: &TabViewProps) -> Html {
    let user = &props.user;
    let busy = props.busy();

    html! {
        <div class="space-y-6">
            <div class="divide-y divide-gray-200">
                <FieldEditor
                    kind={FieldKind::Username}
                    display_value={user.username.clone()}
                    session={props.edits.session(FieldKind::Username).cloned()}
                    {busy}
                    on_action={props.on_action.clone()}
                />
                <FieldEditor
                    kind={FieldKind::Email}
                    display_value={user.email.clone()}
                    session={props.edits.session(FieldKind::Email).cloned()}
                    {busy}
                    on_action={props.on_action.clone()}
                />
            </div>
            <div class="flex items-center justify-between text-sm text-gray-600">
                if let Some(label) = user.role.label() {
                    <span class={classes!("px-2", "py-1", "rounded-full", "font-medium", role_badge_class(user.role))}>
                        {label}
                    </span>
                }
                <span>{format!("Member since {}", user.member_since.format("%B %Y"))}</span>
            </div>
        </div>
    }
}
