use std::collections::HashSet;

use dnsarc_types::{ConsoleError, DnsRecord, EditRecordForm, RecordForm, Zone};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{
    confirm_dialog::{delete_description, ConfirmDialog},
    record_dialogs::{CreateRecordDialog, EditRecordDialog},
    toast::use_toasts,
};
use crate::errors::{console_error, report_error};
use crate::query::{use_query_client, QueryClient, QueryKey};

#[server]
pub async fn get_zone(zone_name: String) -> Result<Zone, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().get_zone_by_name(&zone_name).await;
    console.finish(result)
}

#[server]
pub async fn list_records(zone_name: String) -> Result<Vec<DnsRecord>, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().list_records(&zone_name).await;
    console.finish(result)
}

#[server]
pub async fn create_record(
    zone_name: String,
    name: String,
    record_type: String,
    content: String,
    ttl: String,
) -> Result<DnsRecord, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let form = RecordForm {
        name,
        record_type,
        content,
        ttl,
    };
    let console = RequestConsole::load()?;
    let result = console.api().create_record(&zone_name, &form).await;
    console.finish(result)
}

#[server]
pub async fn update_record(
    id: String,
    content: String,
    ttl: String,
) -> Result<DnsRecord, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let form = EditRecordForm { id, content, ttl };
    let console = RequestConsole::load()?;
    let result = console.api().update_record(&form).await;
    console.finish(result)
}

#[server]
pub async fn delete_record(id: String) -> Result<(), ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().delete_record(&id).await;
    console.finish(result)
}

/// Every record mutation refreshes that zone's record list.
pub fn records_changed(queries: QueryClient, zoneName: &str) {
    queries.invalidate(QueryKey::DnsRecords(zoneName.to_string()));
}

#[component]
pub fn ZonePage() -> impl IntoView {
    let params = use_params_map();
    let zoneName = Memo::new(move |_| params.read().get("name").unwrap_or_default());

    #[allow(unused_variables)]
    let (zone, setZone) = signal(Option::<Result<Zone, ConsoleError>>::None);
    #[allow(unused_variables)]
    let (records, setRecords) = signal(Option::<Result<Vec<DnsRecord>, ConsoleError>>::None);
    let queries = use_query_client();
    let toasts = use_toasts();

    #[cfg(feature = "hydrate")]
    {
        use crate::errors::handle_load_error;
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            let name = zoneName.get();
            let _ = queries.generation(&QueryKey::Zone(name.clone()));
            spawn_local(async move {
                let result = get_zone(name).await.map_err(console_error);
                if let Err(e) = &result {
                    handle_load_error(e);
                }
                setZone.set(Some(result));
            });
        });

        Effect::new(move |_| {
            let name = zoneName.get();
            let _ = queries.generation(&QueryKey::DnsRecords(name.clone()));
            spawn_local(async move {
                let result = list_records(name).await.map_err(console_error);
                if let Err(e) = &result {
                    handle_load_error(e);
                }
                setRecords.set(Some(result));
            });
        });
    }

    let invalidateRecords = move || records_changed(queries, &zoneName.get_untracked());

    let createOpen = RwSignal::new(false);
    let createForm = RwSignal::new(RecordForm::default());
    let createAction = ServerAction::<CreateRecord>::new();

    Effect::new(move |_| match createAction.value().get() {
        Some(Ok(record)) => {
            toasts.success(format!("Record {} created", record.name));
            createForm.set(RecordForm::default());
            createOpen.set(false);
            invalidateRecords();
        }
        Some(Err(e)) => report_error(toasts, &console_error(e)),
        None => {}
    });

    let editOpen = RwSignal::new(false);
    let editTarget = RwSignal::new(Option::<DnsRecord>::None);
    let editForm = RwSignal::new(EditRecordForm::default());
    let updateAction = ServerAction::<UpdateRecord>::new();

    Effect::new(move |_| match updateAction.value().get() {
        Some(Ok(record)) => {
            toasts.success(format!("Record {} updated", record.name));
            editForm.set(EditRecordForm::default());
            editTarget.set(None);
            editOpen.set(false);
            invalidateRecords();
        }
        Some(Err(e)) => report_error(toasts, &console_error(e)),
        None => {}
    });

    let confirmOpen = RwSignal::new(false);
    let deleteTarget = RwSignal::new(Option::<DnsRecord>::None);
    let deleting = RwSignal::new(HashSet::<String>::new());

    // Each confirmed deletion runs on its own; several may be in flight.
    let confirmDelete = move || {
        let Some(record) = deleteTarget.get_untracked() else {
            return;
        };
        confirmOpen.set(false);
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            deleting.update(|ids| {
                ids.insert(record.id.clone());
            });
            spawn_local(async move {
                let result = delete_record(record.id.clone()).await.map_err(console_error);
                deleting.update(|ids| {
                    ids.remove(&record.id);
                });
                match result {
                    Ok(()) => {
                        toasts.success(format!("Record {} deleted", record.name));
                        invalidateRecords();
                    }
                    Err(e) => report_error(toasts, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    };

    let deletePending = Signal::derive(move || {
        deleteTarget.with(|t| t.as_ref().is_some_and(|r| deleting.with(|ids| ids.contains(&r.id))))
    });

    view! {
        <div class="dashboard-header">
            <a class="btn btn-ghost btn-sm" href="/dash/zones">"\u{2190}"</a>
            <h1>{move || zoneName.get()}</h1>
            {move || match zone.get() {
                Some(Ok(z)) if z.is_active => {
                    view! { <span class="badge badge-active">"Active"</span> }.into_any()
                }
                Some(Ok(_)) => {
                    view! { <span class="badge badge-inactive">"Inactive"</span> }.into_any()
                }
                _ => view! { <span></span> }.into_any(),
            }}
            <button class="btn btn-primary btn-sm" on:click=move |_| createOpen.set(true)>
                "Add Record"
            </button>
        </div>
        {move || match records.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading records..."
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) if list.is_empty() => {
                view! {
                    <div class="container-empty">
                        <p>"No records found"</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                view! {
                    <div class="record-list">
                        {list
                            .into_iter()
                            .map(|record| {
                                let recordId = record.id.clone();
                                let isDeleting = move || deleting.with(|ids| ids.contains(&recordId));
                                let editing = record.clone();
                                let removing = record.clone();
                                view! {
                                    <div class="record-row card">
                                        <div class="record-badges">
                                            <span class="badge">{record.record_type.clone()}</span>
                                            <span class="badge badge-muted">
                                                {format!("TTL {}", record.ttl)}
                                            </span>
                                        </div>
                                        <div class="record-body">
                                            <strong class="record-name">{record.name.clone()}</strong>
                                            <span class="record-content">{record.content.clone()}</span>
                                        </div>
                                        <div class="record-actions">
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| {
                                                    editForm.set(EditRecordForm::from_record(&editing));
                                                    editTarget.set(Some(editing.clone()));
                                                    editOpen.set(true);
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-sm btn-danger-text"
                                                disabled=isDeleting
                                                on:click=move |_| {
                                                    deleteTarget.set(Some(removing.clone()));
                                                    confirmOpen.set(true);
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }
            Some(Err(e)) => {
                view! {
                    <div class="card">
                        <p class="login-error">"Failed to load records: " {e.message().to_string()}</p>
                    </div>
                }
                    .into_any()
            }
        }}
        <CreateRecordDialog
            open=createOpen
            form=createForm
            pending=createAction.pending()
            on_submit=move |form: RecordForm| {
                createAction.dispatch(CreateRecord {
                    zone_name: zoneName.get_untracked(),
                    name: form.name,
                    record_type: form.record_type,
                    content: form.content,
                    ttl: form.ttl,
                });
            }
        />
        <EditRecordDialog
            open=editOpen
            target=editTarget
            form=editForm
            pending=updateAction.pending()
            on_submit=move |form: EditRecordForm| {
                updateAction.dispatch(UpdateRecord {
                    id: form.id,
                    content: form.content,
                    ttl: form.ttl,
                });
            }
        />
        {move || {
            let description = deleteTarget
                .with(|t| t.as_ref().map(|r| delete_description("record", &r.name)))
                .unwrap_or_default();
            view! {
                <ConfirmDialog
                    open=confirmOpen
                    description=description
                    pending=deletePending
                    on_confirm=confirmDelete
                />
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn record(id: &str, name: &str) -> DnsRecord {
        DnsRecord {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn deleted_record_is_gone_on_next_fetch() {
        let owner = Owner::new();
        owner.with(|| {
            let queries = QueryClient::new();
            let remote = Arc::new(Mutex::new(vec![record("r1", "www"), record("r2", "mail")]));

            let records = Memo::new({
                let remote = Arc::clone(&remote);
                move |_| {
                    let _ = queries.generation(&QueryKey::DnsRecords("example.com".into()));
                    remote.lock().unwrap().iter().map(|r| r.id.clone()).collect::<Vec<_>>()
                }
            });
            assert_eq!(records.get_untracked(), vec!["r1", "r2"]);

            remote.lock().unwrap().retain(|r| r.id != "r1");
            assert_eq!(records.get_untracked(), vec!["r1", "r2"]);

            records_changed(queries, "example.com");
            assert_eq!(records.get_untracked(), vec!["r2"]);
        });
    }

    #[test]
    fn other_zones_keep_their_generation() {
        let owner = Owner::new();
        owner.with(|| {
            let queries = QueryClient::new();
            let other = Memo::new(move |_| queries.generation(&QueryKey::DnsRecords("other.org".into())));
            records_changed(queries, "example.com");
            assert_eq!(other.get_untracked(), 0);
        });
    }
}
