use std::collections::HashSet;

use dnsarc_types::{ConsoleError, Zone, ZoneForm};
use leptos::prelude::*;

use crate::components::{
    confirm_dialog::{delete_description, ConfirmDialog},
    create_zone_dialog::CreateZoneDialog,
    toast::use_toasts,
};
use crate::errors::{console_error, report_error};
use crate::query::{use_query_client, QueryClient, QueryKey};

#[server]
pub async fn list_zones() -> Result<Vec<Zone>, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().list_zones().await;
    console.finish(result)
}

#[server]
pub async fn create_zone(zone_name: String) -> Result<Zone, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().create_zone(&ZoneForm::new(zone_name)).await;
    console.finish(result)
}

#[server]
pub async fn delete_zone(id: String) -> Result<(), ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().delete_zone(&id).await;
    console.finish(result)
}

/// Clears the form, closes its dialog and refreshes the zone list.
pub fn zone_created(form: RwSignal<ZoneForm>, open: RwSignal<bool>, queries: QueryClient) {
    form.set(ZoneForm::default());
    open.set(false);
    queries.invalidate(QueryKey::Zones);
}

#[component]
pub fn ZonesPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (zones, setZones) = signal(Option::<Result<Vec<Zone>, ConsoleError>>::None);
    let queries = use_query_client();
    let toasts = use_toasts();

    #[cfg(feature = "hydrate")]
    {
        use crate::errors::handle_load_error;
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            let _ = queries.generation(&QueryKey::Zones);
            spawn_local(async move {
                let result = list_zones().await.map_err(console_error);
                if let Err(e) = &result {
                    handle_load_error(e);
                }
                setZones.set(Some(result));
            });
        });
    }

    let createOpen = RwSignal::new(false);
    let createForm = RwSignal::new(ZoneForm::default());
    let createAction = ServerAction::<CreateZone>::new();

    Effect::new(move |_| match createAction.value().get() {
        Some(Ok(zone)) => {
            toasts.success(format!("Zone {} created", zone.zone_name));
            zone_created(createForm, createOpen, queries);
        }
        Some(Err(e)) => report_error(toasts, &console_error(e)),
        None => {}
    });

    let confirmOpen = RwSignal::new(false);
    let deleteTarget = RwSignal::new(Option::<Zone>::None);
    let deleting = RwSignal::new(HashSet::<String>::new());

    let confirmDelete = move || {
        let Some(zone) = deleteTarget.get_untracked() else {
            return;
        };
        confirmOpen.set(false);
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            deleting.update(|ids| {
                ids.insert(zone.id.clone());
            });
            spawn_local(async move {
                let result = delete_zone(zone.id.clone()).await.map_err(console_error);
                deleting.update(|ids| {
                    ids.remove(&zone.id);
                });
                match result {
                    Ok(()) => {
                        toasts.success(format!("Zone {} deleted", zone.zone_name));
                        queries.invalidate(QueryKey::Zones);
                    }
                    Err(e) => report_error(toasts, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = zone;
        }
    };

    let deletePending = Signal::derive(move || {
        deleteTarget.with(|t| t.as_ref().is_some_and(|z| deleting.with(|ids| ids.contains(&z.id))))
    });

    view! {
        <div class="dashboard-header">
            <h1>"Zones"</h1>
            <button class="btn btn-primary btn-sm" on:click=move |_| createOpen.set(true)>
                "Create Zone"
            </button>
        </div>
        {move || match zones.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading zones..."
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) if list.is_empty() => {
                view! {
                    <div class="container-empty">
                        <p>"No zones yet. Create one to get started."</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                view! {
                    <div class="zone-list">
                        {list
                            .into_iter()
                            .map(|zone| {
                                let href = format!("/dash/zone/{}", zone.zone_name);
                                let zoneId = zone.id.clone();
                                let isDeleting = move || deleting.with(|ids| ids.contains(&zoneId));
                                let target = zone.clone();
                                view! {
                                    <div class="zone-row card">
                                        <a class="zone-name" href=href>
                                            {zone.zone_name.clone()}
                                        </a>
                                        {if zone.is_active {
                                            view! { <span class="badge badge-active">"Active"</span> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <span class="badge badge-inactive">"Inactive"</span>
                                            }
                                                .into_any()
                                        }}
                                        <button
                                            class="btn btn-ghost btn-sm btn-danger-text"
                                            disabled=isDeleting
                                            on:click=move |_| {
                                                deleteTarget.set(Some(target.clone()));
                                                confirmOpen.set(true);
                                            }
                                        >
                                            "Delete"
                                        </button>
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
                        <p class="login-error">"Failed to load zones: " {e.message().to_string()}</p>
                        <button
                            class="btn btn-ghost btn-sm"
                            on:click=move |_| queries.invalidate(QueryKey::Zones)
                        >
                            "Retry"
                        </button>
                    </div>
                }
                    .into_any()
            }
        }}
        <CreateZoneDialog
            open=createOpen
            form=createForm
            pending=createAction.pending()
            on_submit=move |form: ZoneForm| {
                createAction.dispatch(CreateZone { zone_name: form.zone_name });
            }
        />
        {move || {
            let description = deleteTarget
                .with(|t| t.as_ref().map(|z| delete_description("zone", &z.zone_name)))
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
