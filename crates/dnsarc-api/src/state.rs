use dnsarc_client::{ConsoleApi, HttpTransport, SessionStore};
use http::HeaderMap;

use crate::session::SessionCookie;

/// Shared by the axum layers and, through Leptos context, the server functions.
#[derive(Clone, Debug)]
pub struct AppState {
    pub transport: HttpTransport,
    pub session_cookie: SessionCookie,
    /// Shown on the dashboard so users can delegate their domains.
    pub nameservers: Vec<String>,
}

impl AppState {
    /// A client bound to the session carried by this request's cookie.
    pub fn console(&self, headers: &HeaderMap) -> ConsoleApi<HttpTransport> {
        let session = self.session_cookie.read(headers);
        ConsoleApi::new(self.transport.clone(), SessionStore::new(session))
    }
}
