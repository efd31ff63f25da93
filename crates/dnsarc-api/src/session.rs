use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dnsarc_client::Session;
use http::{HeaderMap, HeaderValue};

/// Where the browser keeps its session between page loads.
#[derive(Clone, Debug)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub max_age: time::Duration,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool, maxAgeHours: i64) -> Self {
        Self {
            name: name.into(),
            secure,
            max_age: time::Duration::hours(maxAgeHours),
        }
    }

    /// Missing or unreadable cookies read as signed out.
    pub fn read(&self, headers: &HeaderMap) -> Session {
        CookieJar::from_headers(headers)
            .get(&self.name)
            .map(|c| Session::decode(c.value()))
            .unwrap_or_default()
    }

    /// Cookie persisting `session`; a signed-out session yields a removal cookie.
    pub fn cookie(&self, session: &Session) -> Cookie<'static> {
        if !session.is_signed_in() {
            return self.removal();
        }
        Cookie::build((self.name.clone(), session.encode()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(self.max_age)
            .build()
    }

    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.name.clone(), String::new()))
            .path("/")
            .build();
        cookie.make_removal();
        cookie
    }

    /// `Set-Cookie` value for responses that are not built through a `CookieJar`.
    pub fn header_value(&self, session: &Session) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.cookie(session).to_string()).ok()
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new("dnsarc_session", false, 24)
    }
}
