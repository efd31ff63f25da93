use leptos::prelude::*;

use crate::components::dialog::Dialog;

#[component]
pub fn ConfirmDialog<F>(
    open: RwSignal<bool>,
    #[prop(into)] description: String,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: F,
) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    view! {
        <Dialog open title="Are you absolutely sure?" description=description>
            <div class="dialog-actions">
                <button class="btn btn-ghost" on:click=move |_| open.set(false)>
                    "Cancel"
                </button>
                <button
                    class="btn btn-danger"
                    disabled=move || pending.get()
                    on:click=move |_| on_confirm()
                >
                    {move || if pending.get() { "Deleting..." } else { "Continue" }}
                </button>
            </div>
        </Dialog>
    }
}

/// Confirmation copy for deleting a named resource.
pub fn delete_description(kind: &str, name: &str) -> String {
    format!("This action cannot be undone. This will permanently delete this {kind}: {name}")
}
