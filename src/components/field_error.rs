//! Inline validation message under a form field.

use leptos::prelude::*;

/// Renders `message` when there is one; nothing otherwise.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
