use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dnsarc_types::User;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The signed-in user as the browser remembers it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: Option<String>,
    /// Profile cached at sign-in, if the remote returned one.
    pub user: Option<User>,
}

impl Session {
    pub fn signed_in(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            access_token: Some(token.into()),
            user,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Persisted form: URL-safe base64 of the JSON, safe to use as a cookie value.
    pub fn encode(&self) -> String {
        // Serializing plain strings and options cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Inverse of [`Session::encode`]. Anything unreadable is treated as signed out.
    pub fn decode(value: &str) -> Session {
        let bytes = match URL_SAFE_NO_PAD.decode(value.trim()) {
            Ok(b) => b,
            Err(e) => {
                warn!("discarding undecodable session: {e}");
                return Session::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => session,
            Err(e) => {
                warn!("discarding malformed session: {e}");
                Session::default()
            }
        }
    }
}

/// Shared handle to the current session. Clones see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .access_token
            .clone()
            .filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.read().is_signed_in()
    }

    pub fn sign_in(&self, token: impl Into<String>, user: Option<User>) {
        debug!("session signed in");
        *self.inner.write() = Session::signed_in(token, user);
    }

    /// Refresh the cached profile without touching the token.
    pub fn cache_user(&self, user: User) {
        let mut session = self.inner.write();
        if session.is_signed_in() {
            session.user = Some(user);
        }
    }

    pub fn sign_out(&self) {
        debug!("session signed out");
        *self.inner.write() = Session::default();
    }
}
