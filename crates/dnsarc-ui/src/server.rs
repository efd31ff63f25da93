use dnsarc_api::AppState;
use dnsarc_client::{ConsoleApi, HttpTransport, Session};
use dnsarc_types::ConsoleError;
use http::{header::SET_COOKIE, request::Parts};
use leptos::prelude::*;
use leptos_axum::ResponseOptions;

use crate::errors::ConsoleFnError;

pub fn app_state() -> Result<AppState, ConsoleFnError> {
    use_context::<AppState>()
        .ok_or_else(|| ServerFnError::ServerError("console state unavailable".into()))
}

/// A console client bound to the calling browser's session cookie.
///
/// [`RequestConsole::finish`] writes the session back when the call changed it,
/// so a sign-in or an `unauthenticated` sign-out reaches the browser.
pub struct RequestConsole {
    state: AppState,
    before: Session,
    api: ConsoleApi<HttpTransport>,
}

impl RequestConsole {
    pub fn load() -> Result<Self, ConsoleFnError> {
        let state = app_state()?;
        let parts = use_context::<Parts>()
            .ok_or_else(|| ServerFnError::ServerError("request context unavailable".into()))?;
        let api = state.console(&parts.headers);
        let before = api.session().snapshot();
        Ok(Self { state, before, api })
    }

    pub fn api(&self) -> &ConsoleApi<HttpTransport> {
        &self.api
    }

    pub fn finish<T>(self, result: Result<T, ConsoleError>) -> Result<T, ConsoleFnError> {
        let after = self.api.session().snapshot();
        if after != self.before {
            match self.state.session_cookie.header_value(&after) {
                Some(value) => {
                    if let Some(response) = use_context::<ResponseOptions>() {
                        response.append_header(SET_COOKIE, value);
                    }
                }
                None => tracing::warn!("session cookie could not be encoded"),
            }
        }
        result.map_err(|e| {
            tracing::debug!(error = %e, "console call failed");
            ServerFnError::WrappedServerError(e)
        })
    }
}
