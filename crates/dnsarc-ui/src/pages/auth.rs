use dnsarc_types::ConsoleError;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::errors::{console_error, handle_load_error};
use crate::query::{use_query_client, QueryKey};

#[server]
pub async fn google_login_url() -> Result<String, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().google_login_url().await;
    console.finish(result)
}

/// Entry point for signing in. The identity provider sends the browser back
/// here with `?token=`, which the page guard turns into a session.
#[component]
pub fn AuthPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (loginUrl, setLoginUrl) = signal(Option::<Result<String, ConsoleError>>::None);
    let queries = use_query_client();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            let _ = queries.generation(&QueryKey::GoogleLoginUrl);
            spawn_local(async move {
                let result = google_login_url().await.map_err(console_error);
                if let Err(e) = &result {
                    handle_load_error(e);
                }
                setLoginUrl.set(Some(result));
            });
        });
    }

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"D"</div>
                    <h1>"Welcome to DNSARC"</h1>
                    <p>"Sign in to manage your zones"</p>
                </div>
                {move || match loginUrl.get() {
                    None => {
                        view! {
                            <button class="btn btn-primary" disabled=true>
                                "Continue with Google"
                            </button>
                        }
                            .into_any()
                    }
                    Some(Ok(url)) => {
                        view! {
                            <a class="btn btn-primary" href=url rel="external">
                                "Continue with Google"
                            </a>
                        }
                            .into_any()
                    }
                    Some(Err(e)) => {
                        view! {
                            <div class="login-error">
                                "Google sign-in is unavailable: " {e.message().to_string()}
                            </div>
                            <button
                                class="btn btn-ghost"
                                on:click=move |_| queries.invalidate(QueryKey::GoogleLoginUrl)
                            >
                                "Retry"
                            </button>
                        }
                            .into_any()
                    }
                }}
                <div class="login-divider">"or"</div>
                <a class="btn btn-ghost" href="/login">"Sign in with email"</a>
                <a class="btn btn-ghost" href="/register">"Create an account"</a>
                <a class="back-link" href="/">"Back Home"</a>
            </div>
        </div>
    }
}
