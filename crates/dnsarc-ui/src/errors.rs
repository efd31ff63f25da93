use dnsarc_types::ConsoleError;
use leptos::prelude::*;

use crate::components::toast::ToastContext;

pub const LOGIN_PATH: &str = "/auth";

/// Error type every server function in the console returns.
pub type ConsoleFnError = ServerFnError<ConsoleError>;

/// Collapses transport-level server function failures into the console's error.
pub fn console_error(e: ConsoleFnError) -> ConsoleError {
    match e {
        ServerFnError::WrappedServerError(inner) => inner,
        other => ConsoleError::Remote(other.to_string()),
    }
}

/// The session cookie is already gone when this runs; a full load lets the
/// page guard see that.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = window().location().set_href(LOGIN_PATH) {
            leptos::logging::warn!("redirect to login failed: {e:?}");
        }
    }
}

/// Loader failures render inline; only an expired session leaves the page.
pub fn handle_load_error(err: &ConsoleError) {
    if err.is_unauthenticated() {
        redirect_to_login();
    }
}

/// Mutation failures surface as a toast.
pub fn report_error(toasts: ToastContext, err: &ConsoleError) {
    toasts.error(err.message());
    handle_load_error(err);
}
