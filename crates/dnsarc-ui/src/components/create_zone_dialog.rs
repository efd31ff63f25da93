use dnsarc_types::{FieldErrors, ZoneForm};
use leptos::{ev::SubmitEvent, prelude::*};

use crate::components::{dialog::Dialog, field::FieldMessage};

/// Submits only a form that passes local validation; the caller clears `form`
/// and closes the dialog once the zone exists.
#[component]
pub fn CreateZoneDialog<F>(
    open: RwSignal<bool>,
    form: RwSignal<ZoneForm>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(ZoneForm) + Clone + Send + Sync + 'static,
{
    let (errors, setErrors) = signal(FieldErrors::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        match current.validate() {
            Ok(_) => {
                setErrors.set(FieldErrors::default());
                on_submit(current);
            }
            Err(e) => setErrors.set(e),
        }
    };

    view! {
        <Dialog open title="Create Zone" description="Add a domain you want DNSArc to serve.">
            <form class="dialog-form" on:submit=submit>
                <div class="form-group">
                    <label for="zone-name">"Zone Name"</label>
                    <input
                        id="zone-name"
                        type="text"
                        placeholder="example.com"
                        prop:value=move || form.with(|f| f.zone_name.clone())
                        on:input=move |ev| form.update(|f| f.zone_name = event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="zone_name" />
                </div>
                <div class="dialog-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
