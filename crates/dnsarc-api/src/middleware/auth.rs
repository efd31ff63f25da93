use axum::{
    body::Body,
    extract::{Query, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use dnsarc_client::Session;
use serde::Deserialize;
use tracing::{debug, info};

use crate::state::AppState;

pub const LOGIN_PATH: &str = "/auth";
pub const DASH_PATH: &str = "/dash";

/// Outcome of checking a page load against the session.
#[derive(Debug, PartialEq, Eq)]
pub enum PageGuard {
    Allow,
    Redirect(&'static str),
}

fn is_dash(path: &str) -> bool {
    path == DASH_PATH || path.starts_with("/dash/")
}

fn is_sign_in_page(path: &str) -> bool {
    matches!(path, "/auth" | "/login" | "/register")
}

/// Dashboard pages need a session; sign-in pages bounce a signed-in user to the dashboard.
pub fn page_guard(path: &str, signedIn: bool) -> PageGuard {
    if is_dash(path) && !signedIn {
        PageGuard::Redirect(LOGIN_PATH)
    } else if is_sign_in_page(path) && signedIn {
        PageGuard::Redirect(DASH_PATH)
    } else {
        PageGuard::Allow
    }
}

#[derive(Deserialize)]
struct TokenLanding {
    token: Option<String>,
}

/// Middleware for page routes.
///
/// The external identity flow returns to `/auth?token=...`; that token becomes
/// the session before any guard runs.
pub async fn require_page_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if path == LOGIN_PATH {
        let token = Query::<TokenLanding>::try_from_uri(request.uri())
            .ok()
            .and_then(|q| q.0.token)
            .filter(|t| !t.is_empty());
        if let Some(token) = token {
            info!("signed in through identity provider");
            let session = Session::signed_in(token, None);
            let jar = CookieJar::new().add(state.session_cookie.cookie(&session));
            return (jar, Redirect::to(DASH_PATH)).into_response();
        }
    }

    let signedIn = state.session_cookie.read(request.headers()).is_signed_in();
    match page_guard(&path, signedIn) {
        PageGuard::Allow => next.run(request).await,
        PageGuard::Redirect(to) => {
            debug!(path, to, "page guard redirect");
            Redirect::to(to).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionCookie;
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use dnsarc_client::HttpTransport;
    use http::header::{COOKIE, LOCATION, SET_COOKIE};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            transport: HttpTransport::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap(),
            session_cookie: SessionCookie::default(),
            nameservers: vec!["ns1.example.net".into()],
        }
    }

    fn app() -> Router {
        let state = test_state();
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/auth", get(|| async { "auth" }))
            .route("/dash", get(|| async { "dash" }))
            .route("/dash/zones", get(|| async { "zones" }))
            .layer(middleware::from_fn_with_state(state, require_page_auth))
    }

    fn session_cookie_header(token: &str) -> String {
        let cookie = SessionCookie::default().cookie(&Session::signed_in(token, None));
        format!("{}={}", cookie.name(), cookie.value())
    }

    async fn get_path(uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        app().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    #[test]
    fn guard_rules() {
        assert_eq!(page_guard("/dash", false), PageGuard::Redirect("/auth"));
        assert_eq!(page_guard("/dash/zone/example.com", false), PageGuard::Redirect("/auth"));
        assert_eq!(page_guard("/dashboard", false), PageGuard::Allow);
        assert_eq!(page_guard("/dash/zones", true), PageGuard::Allow);
        assert_eq!(page_guard("/register", true), PageGuard::Redirect("/dash"));
        assert_eq!(page_guard("/login", false), PageGuard::Allow);
        assert_eq!(page_guard("/", true), PageGuard::Allow);
    }

    #[tokio::test]
    async fn protected_page_without_session_redirects_to_login() {
        let response = get_path("/dash/zones", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/auth");
    }

    #[tokio::test]
    async fn protected_page_with_session_is_served() {
        let cookie = session_cookie_header("t1");
        let response = get_path("/dash", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cleared_session_cookie_redirects_again() {
        let settings = SessionCookie::default();
        let removal = settings.removal();
        let cookie = format!("{}={}", removal.name(), removal.value());
        let response = get_path("/dash", Some(&cookie)).await;
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/auth");
    }

    #[tokio::test]
    async fn token_landing_sets_session_and_redirects() {
        let response = get_path("/auth?token=from-idp", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/dash");

        let setCookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        let value = setCookie
            .split(';')
            .next()
            .and_then(|pair| pair.split_once('='))
            .map(|(_, v)| v.to_string())
            .unwrap();
        assert_eq!(Session::decode(&value).access_token.as_deref(), Some("from-idp"));
    }

    #[tokio::test]
    async fn signed_in_user_skips_login_page() {
        let cookie = session_cookie_header("t1");
        let response = get_path("/auth", Some(&cookie)).await;
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/dash");
    }

    #[tokio::test]
    async fn public_pages_are_open() {
        let response = get_path("/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = get_path("/auth", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
