use shared::profile::{DraftField, EditPhase, EditSession, FieldKind};
use yew::prelude::*;

/// User intent forwarded from a field editor up to the panel
#[derive(Clone, Debug, PartialEq)]
pub enum FieldAction {
    StartEdit(FieldKind),
    Input {
        field: FieldKind,
        name: String,
        value: String,
    },
    Submit(FieldKind),
    Cancel(FieldKind),
}

#[derive(Properties, PartialEq)]
pub struct FieldEditorProps {
    pub kind: FieldKind,
    /// Persisted value shown while viewing
    pub display_value: AttrValue,
    pub session: Option<EditSession>,
    /// A global or panel update is in flight
    pub busy: bool,
    pub on_action: Callback<FieldAction>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

fn draft_label(draft: DraftField) -> &'static str {
    match draft {
        DraftField::Username => "New Username",
        DraftField::Email => "New Email",
        DraftField::CurrentPassword => "Current Password",
        DraftField::NewPassword => "New Password",
        DraftField::ConfirmPassword => "Confirm New Password",
    }
}

fn input_type(draft: DraftField) -> &'static str {
    match draft {
        DraftField::Email => "email",
        draft if draft.is_secret() => "password",
        _ => "text",
    }
}

#[function_component(FieldEditor)]
pub fn field_editor(props: &FieldEditorProps) -> Html {
    let kind = props.kind;

    let Some(session) = &props.session else {
        let on_edit_click = props.on_action.reform(move |_: MouseEvent| FieldAction::StartEdit(kind));
        return html! {
            <div class="flex items-center justify-between py-3" data-field={kind.label()}>
                <div>
                    <label class="block text-sm font-medium text-gray-600">{kind.label()}</label>
                    <p class="text-gray-900">{props.display_value.to_string()}</p>
                </div>
                <button
                    onclick={on_edit_click}
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition-colors"
                >
                    {format!("Change {}", kind.label())}
                </button>
            </div>
        };
    };

    let submitting = session.phase() == EditPhase::Submitting;

    let on_submit = props.on_action.reform(move |e: SubmitEvent| {
        e.prevent_default();
        FieldAction::Submit(kind)
    });
    let on_cancel = props.on_action.reform(move |_: MouseEvent| FieldAction::Cancel(kind));
    let on_input = props.on_action.reform(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        FieldAction::Input {
            field: kind,
            name: input.name(),
            value: input.value(),
        }
    });

    html! {
        <form class="space-y-4 py-3" onsubmit={on_submit} data-field={kind.label()}>
            <h3 class="text-lg font-semibold text-gray-700">{format!("Update {}", kind.label())}</h3>
            {kind.drafts().iter().map(|draft| html! {
                <div key={draft.input_name()}>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{draft_label(*draft)}</label>
                    <input
                        type={input_type(*draft)}
                        name={draft.input_name()}
                        value={session.draft(*draft).unwrap_or_default().to_string()}
                        oninput={on_input.clone()}
                        disabled={submitting}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                </div>
            }).collect::<Html>()}
            if let Some(hint) = &props.hint {
                <p class="text-xs text-gray-500">{hint.to_string()}</p>
            }
            if let Some(error) = session.error() {
                <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded" role="alert">
                    {error.to_string()}
                </div>
            }
            <div class="flex space-x-3">
                <button
                    type="submit"
                    disabled={props.busy}
                    class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50 transition-colors"
                >
                    {if submitting { "Updating..." } else { "Save" }}
                </button>
                <button
                    type="button"
                    onclick={on_cancel}
                    disabled={submitting}
                    class="px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700 disabled:opacity-50 transition-colors"
                >
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
