use dnsarc_types::{ConsoleError, Credentials, FieldErrors, User};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

use crate::components::{field::FieldMessage, toast::use_toasts};
use crate::errors::console_error;

#[server]
pub async fn login(email: String, password: String) -> Result<User, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().login(&Credentials::new(email, password)).await;
    console.finish(result)
}

/// Validation failures explain themselves; anything else gets the generic line.
pub fn credential_failure(err: &ConsoleError, fallback: &str) -> String {
    match err {
        ConsoleError::Validation(msg) => msg.clone(),
        _ => fallback.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let loginAction = ServerAction::<Login>::new();
    let pending = loginAction.pending();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let credentials = RwSignal::new(Credentials::default());
    let (errors, setErrors) = signal(FieldErrors::default());

    Effect::new(move |_| match loginAction.value().get() {
        Some(Ok(_)) => {
            toasts.success("Login successful");
            navigate("/dash", Default::default());
        }
        Some(Err(e)) => toasts.error(credential_failure(&console_error(e), "Failed to login")),
        None => {}
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = credentials.get_untracked();
        match current.validate_for_login() {
            Ok(()) => {
                setErrors.set(FieldErrors::default());
                loginAction.dispatch(Login {
                    email: current.email,
                    password: current.password,
                });
            }
            Err(e) => setErrors.set(e),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"D"</div>
                    <h1>"Sign In"</h1>
                    <p>"Enter your email and password to continue"</p>
                </div>
                <form on:submit=submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || credentials.with(|c| c.email.clone())
                            on:input=move |ev| credentials.update(|c| c.email = event_target_value(&ev))
                        />
                        <FieldMessage errors=errors field="email" />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || credentials.with(|c| c.password.clone())
                            on:input=move |ev| {
                                credentials.update(|c| c.password = event_target_value(&ev))
                            }
                        />
                        <FieldMessage errors=errors field="password" />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
                <a class="back-link" href="/auth">"Other sign-in options"</a>
            </div>
        </div>
    }
}
