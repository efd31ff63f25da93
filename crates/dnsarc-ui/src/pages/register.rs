use dnsarc_types::{ConsoleError, Credentials, FieldErrors, User};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

use crate::components::{field::FieldMessage, toast::use_toasts};
use crate::errors::console_error;
use crate::pages::login::credential_failure;

#[server]
pub async fn register(
    email: String,
    password: String,
) -> Result<User, ServerFnError<ConsoleError>> {
    use crate::server::RequestConsole;

    let console = RequestConsole::load()?;
    let result = console.api().register(&Credentials::new(email, password)).await;
    console.finish(result)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let registerAction = ServerAction::<Register>::new();
    let pending = registerAction.pending();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let credentials = RwSignal::new(Credentials::default());
    let (errors, setErrors) = signal(FieldErrors::default());

    Effect::new(move |_| match registerAction.value().get() {
        Some(Ok(_)) => {
            toasts.success("Registered successfully");
            navigate("/dash", Default::default());
        }
        Some(Err(e)) => toasts.error(credential_failure(&console_error(e), "Failed to register")),
        None => {}
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = credentials.get_untracked();
        match current.validate_for_register() {
            Ok(()) => {
                setErrors.set(FieldErrors::default());
                registerAction.dispatch(Register {
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
                    <h1>"Create an account"</h1>
                    <p>"Start managing your DNS in minutes"</p>
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
                        {move || if pending.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="login-footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
                <a class="back-link" href="/">"Back Home"</a>
            </div>
        </div>
    }
}
