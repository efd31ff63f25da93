use dnsarc_types::ConsoleError;
use leptos::prelude::*;

use crate::components::toast::use_toasts;

#[server]
pub async fn get_nameservers() -> Result<Vec<String>, ServerFnError<ConsoleError>> {
    let state = crate::server::app_state()?;
    Ok(state.nameservers)
}

#[component]
pub fn DashHomePage() -> impl IntoView {
    #[allow(unused_variables)]
    let (nameservers, setNameservers) = signal(Option::<Result<Vec<String>, ConsoleError>>::None);
    #[allow(unused_variables)]
    let toasts = use_toasts();

    #[cfg(feature = "hydrate")]
    {
        use crate::errors::console_error;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_nameservers().await.map_err(console_error);
            setNameservers.set(Some(result));
        });
    }

    let copy = move |text: String| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::{spawn_local, JsFuture};

            spawn_local(async move {
                let promise = window().navigator().clipboard().write_text(&text);
                match JsFuture::from(promise).await {
                    Ok(_) => toasts.success("Copied to clipboard"),
                    Err(_) => toasts.error("Could not copy to clipboard"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Home"</h1>
        </div>
        <div class="alert card">
            <strong>"Make sure your domain nameserver is set to our nameservers"</strong>
            <p>"The zone will not be active until your domain nameserver is set to our nameservers."</p>
        </div>
        {move || match nameservers.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                view! {
                    <div class="nameserver-list">
                        {list
                            .into_iter()
                            .map(|ns| {
                                let value = ns.clone();
                                view! {
                                    <div class="nameserver card">
                                        <span>{ns}</span>
                                        <button
                                            class="btn btn-ghost btn-sm"
                                            title="Copy"
                                            on:click=move |_| copy(value.clone())
                                        >
                                            "\u{2398}"
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
                        <p class="login-error">"Failed to load nameservers: " {e.message().to_string()}</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
