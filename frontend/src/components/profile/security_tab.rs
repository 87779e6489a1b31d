use shared::profile::{FieldKind, MIN_PASSWORD_LENGTH};
use yew::prelude::*;

use crate::components::profile::field_editor::FieldEditor;
use crate::components::profile::panel::TabViewProps;

#[function_component(SecurityTab)]
pub fn security_tab(props: &TabViewProps) -> Html {
    let hint = format!("Must be at least {} characters long", MIN_PASSWORD_LENGTH);

    html! {
        <div class="space-y-4">
            <FieldEditor
                kind={FieldKind::Password}
                display_value="••••••••"
                session={props.edits.session(FieldKind::Password).cloned()}
                busy={props.busy()}
                on_action={props.on_action.clone()}
                hint={Some(AttrValue::from(hint))}
            />
            <p class="text-sm text-gray-500">
                {"Changing your password keeps you signed in on this device."}
            </p>
        </div>
    }
}
