use dnsarc_types::FieldErrors;
use leptos::prelude::*;

#[component]
pub fn FieldMessage(#[prop(into)] errors: Signal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}
