use http::header::{HeaderValue, AUTHORIZATION};
use tracing::warn;

use crate::error::ConnectError;
use crate::session::SessionStore;
use crate::transport::UnaryRequest;

/// Hooks run around every unary call, in registration order.
pub trait Interceptor: Send + Sync {
    fn on_request(&self, _request: &mut UnaryRequest) {}

    /// Runs before the error is returned to the caller.
    fn on_error(&self, _procedure: &str, _error: &ConnectError) {}
}

/// Attaches the bearer token and drops the session on `unauthenticated`.
#[derive(Clone, Debug)]
pub struct AuthInterceptor {
    session: SessionStore,
}

impl AuthInterceptor {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl Interceptor for AuthInterceptor {
    fn on_request(&self, request: &mut UnaryRequest) {
        let Some(token) = self.session.access_token() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!(
                procedure = request.procedure,
                "session token is not a valid header value, sending unauthenticated"
            ),
        }
    }

    fn on_error(&self, procedure: &str, error: &ConnectError) {
        if error.is_unauthenticated() && self.session.is_signed_in() {
            warn!(procedure, "remote rejected the session, signing out");
            self.session.sign_out();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Code;
    use serde_json::json;

    #[test]
    fn attaches_bearer_token() {
        let store = SessionStore::default();
        store.sign_in("abc", None);
        let interceptor = AuthInterceptor::new(store);

        let mut request = UnaryRequest::new("zone.v1.ZoneService/ListZones", json!({}));
        interceptor.on_request(&mut request);
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn no_header_without_session() {
        let interceptor = AuthInterceptor::new(SessionStore::default());
        let mut request = UnaryRequest::new("auth.v1.AuthService/Login", json!({}));
        interceptor.on_request(&mut request);
        assert!(request.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn only_unauthenticated_clears_session() {
        let store = SessionStore::default();
        store.sign_in("abc", None);
        let interceptor = AuthInterceptor::new(store.clone());

        interceptor.on_error("p", &ConnectError::new(Code::NotFound, "zone not found"));
        assert!(store.is_signed_in());

        interceptor.on_error("p", &ConnectError::new(Code::Unauthenticated, "invalid token"));
        assert!(!store.is_signed_in());
    }
}
