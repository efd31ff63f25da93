use dnsarc_types::{ConsoleError, User};
use leptos::prelude::*;

use crate::errors::redirect_to_login;
#[cfg(feature = "hydrate")]
use crate::errors::{console_error, handle_load_error};
#[cfg(feature = "hydrate")]
use crate::query::QueryKey;
use crate::query::use_query_client;

#[server]
pub async fn who_am_i() -> Result<User, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().who_am_i().await;
    console.finish(result)
}

#[server]
pub async fn logout() -> Result<(), ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    console.api().logout();
    console.finish(Ok(()))
}

#[component]
pub fn AccountPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (account, setAccount) = signal(Option::<Result<User, ConsoleError>>::None);
    #[allow(unused_variables)]
    let queries = use_query_client();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            let _ = queries.generation(&QueryKey::Account);
            spawn_local(async move {
                let result = who_am_i().await.map_err(console_error);
                if let Err(e) = &result {
                    handle_load_error(e);
                }
                setAccount.set(Some(result));
            });
        });
    }

    let signOut = move || {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                if let Err(e) = logout().await {
                    leptos::logging::warn!("logout failed: {e}");
                }
                queries.invalidate(QueryKey::Account);
                redirect_to_login();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        redirect_to_login();
    };

    view! {
        <div class="dashboard-header">
            <h1>"Account"</h1>
        </div>
        {move || match account.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(user)) => {
                let initial = user.initial();
                view! {
                    <div class="account card">
                        <div class="avatar">
                            {if user.avatar.is_empty() {
                                view! { <span class="avatar-fallback">{initial}</span> }.into_any()
                            } else {
                                view! { <img src=user.avatar.clone() alt=initial /> }.into_any()
                            }}
                        </div>
                        <div class="account-details">
                            <span class="badge badge-premium">"Premium"</span>
                            <strong>{user.email.clone()}</strong>
                        </div>
                    </div>
                    <button class="btn btn-ghost" on:click=move |_| signOut()>
                        "Logout"
                    </button>
                }
                    .into_any()
            }
            Some(Err(e)) => {
                view! {
                    <div class="card account-error">
                        <p class="login-error">"Something went wrong: " {e.message().to_string()}</p>
                        <button class="btn btn-ghost" on:click=move |_| signOut()>
                            "Logout"
                        </button>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
