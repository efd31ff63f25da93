use dnsarc_types::{DnsRecord, EditRecordForm, FieldErrors, RecordForm, RecordType};
use leptos::{ev::SubmitEvent, prelude::*};

use crate::components::{dialog::Dialog, field::FieldMessage};

#[component]
pub fn CreateRecordDialog<F>(
    open: RwSignal<bool>,
    form: RwSignal<RecordForm>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(RecordForm) + Clone + Send + Sync + 'static,
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
        <Dialog open title="Create DNS Record">
            <form class="dialog-form" on:submit=submit>
                <div class="form-group">
                    <label for="record-name">"Name"</label>
                    <input
                        id="record-name"
                        type="text"
                        placeholder="www"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="name" />
                </div>
                <div class="form-group">
                    <label for="record-type">"Type"</label>
                    <select
                        id="record-type"
                        prop:value=move || form.with(|f| f.record_type.clone())
                        on:change=move |ev| form.update(|f| f.record_type = event_target_value(&ev))
                    >
                        {RecordType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                    <FieldMessage errors=errors field="type" />
                </div>
                <div class="form-group">
                    <label for="record-content">"Content"</label>
                    <input
                        id="record-content"
                        type="text"
                        placeholder="192.0.2.1"
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="content" />
                </div>
                <div class="form-group">
                    <label for="record-ttl">"TTL"</label>
                    <input
                        id="record-ttl"
                        type="number"
                        prop:value=move || form.with(|f| f.ttl.clone())
                        on:input=move |ev| form.update(|f| f.ttl = event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="ttl" />
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

/// Name and type are fixed once a record exists; only content and TTL change.
#[component]
pub fn EditRecordDialog<F>(
    open: RwSignal<bool>,
    target: RwSignal<Option<DnsRecord>>,
    form: RwSignal<EditRecordForm>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(EditRecordForm) + Clone + Send + Sync + 'static,
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

    let targetName = move || target.with(|t| t.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let targetType =
        move || target.with(|t| t.as_ref().map(|r| r.record_type.clone()).unwrap_or_default());

    view! {
        <Dialog open title="Edit DNS Record">
            <form class="dialog-form" on:submit=submit>
                <div class="form-group">
                    <label for="edit-name">"Name"</label>
                    <input id="edit-name" type="text" readonly prop:value=targetName />
                </div>
                <div class="form-group">
                    <label for="edit-type">"Type"</label>
                    <input id="edit-type" type="text" readonly prop:value=targetType />
                </div>
                <div class="form-group">
                    <label for="edit-content">"Content"</label>
                    <input
                        id="edit-content"
                        type="text"
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="content" />
                </div>
                <div class="form-group">
                    <label for="edit-ttl">"TTL"</label>
                    <input
                        id="edit-ttl"
                        type="number"
                        prop:value=move || form.with(|f| f.ttl.clone())
                        on:input=move |ev| form.update(|f| f.ttl = event_target_value(&ev))
                    />
                    <FieldMessage errors=errors field="ttl" />
                </div>
                <div class="dialog-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
