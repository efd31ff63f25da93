//! Route-level operations behind the console's pages.
//!
//! Each operation validates its form first, then makes exactly one remote
//! call. Failures come back as [`ConsoleError`]; an `unauthenticated` answer
//! has already signed the session out by the time the caller sees it.

use dnsarc_types::{
    ConsoleError, Credentials, DnsRecord, EditRecordForm, RecordForm, User, Zone, ZoneForm,
};
use tracing::info;

use crate::error::ConnectError;
use crate::interceptor::AuthInterceptor;
use crate::rpc::RpcClient;
use crate::session::SessionStore;
use crate::transport::Transport;

pub struct ConsoleApi<T> {
    rpc: RpcClient<T>,
    session: SessionStore,
}

fn remote_error(e: ConnectError) -> ConsoleError {
    if e.is_unauthenticated() {
        ConsoleError::Unauthenticated
    } else {
        ConsoleError::Remote(e.to_string())
    }
}

// A rejected login is a bad credential, not an expired session.
fn credential_error(e: ConnectError) -> ConsoleError {
    ConsoleError::Remote(e.to_string())
}

fn require_id(id: &str) -> Result<(), ConsoleError> {
    if id.trim().is_empty() {
        return Err(ConsoleError::Validation("id is required".into()));
    }
    Ok(())
}

impl<T: Transport> ConsoleApi<T> {
    pub fn new(transport: T, session: SessionStore) -> Self {
        let rpc = RpcClient::new(transport).with_interceptor(AuthInterceptor::new(session.clone()));
        Self { rpc, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ConsoleError> {
        credentials.validate_for_login()?;
        let (token, user) = self
            .rpc
            .auth()
            .login(credentials.email.trim(), &credentials.password)
            .await
            .map_err(credential_error)?;
        info!(email = %user.email, "signed in");
        self.session.sign_in(token, Some(user.clone()));
        Ok(user)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<User, ConsoleError> {
        credentials.validate_for_register()?;
        let (token, user) = self
            .rpc
            .auth()
            .register(credentials.email.trim(), &credentials.password)
            .await
            .map_err(credential_error)?;
        info!(email = %user.email, "registered");
        self.session.sign_in(token, Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        self.session.sign_out();
    }

    pub async fn who_am_i(&self) -> Result<User, ConsoleError> {
        let user = self.rpc.auth().who_am_i().await.map_err(remote_error)?;
        self.session.cache_user(user.clone());
        Ok(user)
    }

    pub async fn google_login_url(&self) -> Result<String, ConsoleError> {
        self.rpc.auth().google_login_url().await.map_err(remote_error)
    }

    pub async fn list_zones(&self) -> Result<Vec<Zone>, ConsoleError> {
        self.rpc.zones().list_zones().await.map_err(remote_error)
    }

    pub async fn get_zone_by_name(&self, zone_name: &str) -> Result<Zone, ConsoleError> {
        if zone_name.is_empty() {
            return Err(ConsoleError::Validation("zone name is required".into()));
        }
        self.rpc
            .zones()
            .get_zone_by_name(zone_name)
            .await
            .map_err(remote_error)
    }

    pub async fn create_zone(&self, form: &ZoneForm) -> Result<Zone, ConsoleError> {
        let zoneName = form.validate()?;
        let zone = self
            .rpc
            .zones()
            .create_zone(&zoneName)
            .await
            .map_err(remote_error)?;
        info!(zone = %zone.zone_name, "zone created");
        Ok(zone)
    }

    pub async fn delete_zone(&self, id: &str) -> Result<(), ConsoleError> {
        require_id(id)?;
        self.rpc.zones().delete_zone(id).await.map_err(remote_error)?;
        info!(id, "zone deleted");
        Ok(())
    }

    pub async fn list_records(&self, zone_name: &str) -> Result<Vec<DnsRecord>, ConsoleError> {
        self.rpc
            .records()
            .list_records_by_zone_name(zone_name)
            .await
            .map_err(remote_error)
    }

    pub async fn create_record(
        &self,
        zone_name: &str,
        form: &RecordForm,
    ) -> Result<DnsRecord, ConsoleError> {
        let record = form.validate()?;
        let created = self
            .rpc
            .records()
            .create_record(zone_name, &record)
            .await
            .map_err(remote_error)?;
        info!(zone = zone_name, name = %created.name, "record created");
        Ok(created)
    }

    pub async fn update_record(&self, form: &EditRecordForm) -> Result<DnsRecord, ConsoleError> {
        let update = form.validate()?;
        self.rpc
            .records()
            .update_record(&update)
            .await
            .map_err(remote_error)
    }

    pub async fn delete_record(&self, id: &str) -> Result<(), ConsoleError> {
        require_id(id)?;
        self.rpc
            .records()
            .delete_record(id)
            .await
            .map_err(remote_error)?;
        info!(id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Code;
    use crate::services::{auth, dns_record, zone};
    use crate::testing::RecordingTransport;
    use serde_json::json;

    fn signed_in_api() -> (ConsoleApi<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::default();
        let session = SessionStore::default();
        session.sign_in("token-1", None);
        (ConsoleApi::new(transport.clone(), session), transport)
    }

    #[tokio::test]
    async fn valid_zone_form_issues_exactly_one_create_call() {
        let (api, transport) = signed_in_api();
        transport.respond(json!({"zone": {"id": "z1", "zoneName": "example.com"}}));

        let zone = api.create_zone(&ZoneForm::new("example.com")).await.unwrap();
        assert_eq!(zone.zone_name, "example.com");
        assert_eq!(transport.procedures(), vec![zone::CREATE_ZONE]);
        assert_eq!(transport.calls()[0].body, json!({"zoneName": "example.com"}));
    }

    #[tokio::test]
    async fn invalid_zone_name_never_reaches_the_network() {
        let (api, transport) = signed_in_api();

        let err = api.create_zone(&ZoneForm::new("not a domain")).await.unwrap_err();
        assert_eq!(err, ConsoleError::Validation("Invalid domain name format.".into()));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn unauthenticated_signs_out_and_reports() {
        let (api, transport) = signed_in_api();
        transport.fail(ConnectError::new(Code::Unauthenticated, "token expired"));

        let err = api.list_records("example.com").await.unwrap_err();
        assert_eq!(err, ConsoleError::Unauthenticated);
        assert!(!api.session().is_signed_in());
    }

    #[tokio::test]
    async fn other_remote_errors_keep_the_session() {
        let (api, transport) = signed_in_api();
        transport.fail(ConnectError::new(Code::NotFound, "record not found"));

        let err = api.delete_record("r1").await.unwrap_err();
        assert_eq!(err, ConsoleError::Remote("not_found: record not found".into()));
        assert!(api.session().is_signed_in());
    }

    #[tokio::test]
    async fn login_stores_token_and_profile() {
        let transport = RecordingTransport::default();
        transport.respond(json!({
            "accessToken": "fresh",
            "user": {"id": "u1", "email": "alice@example.com"}
        }));
        let api = ConsoleApi::new(transport.clone(), SessionStore::default());

        let user = api
            .login(&Credentials::new("alice@example.com", "password123"))
            .await
            .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(api.session().access_token().as_deref(), Some("fresh"));
        assert_eq!(api.session().user(), Some(user));
        assert!(transport.calls()[0].headers.get(http::header::AUTHORIZATION).is_none());
        assert_eq!(transport.procedures(), vec![auth::LOGIN]);
    }

    #[tokio::test]
    async fn rejected_login_is_not_a_session_expiry() {
        let transport = RecordingTransport::default();
        transport.fail(ConnectError::new(Code::Unauthenticated, "invalid password"));
        let api = ConsoleApi::new(transport, SessionStore::default());

        let err = api
            .login(&Credentials::new("alice@example.com", "password123"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Remote(_)));
    }

    #[tokio::test]
    async fn register_without_user_fails() {
        let transport = RecordingTransport::default();
        transport.respond(json!({"accessToken": "t"}));
        let api = ConsoleApi::new(transport, SessionStore::default());

        let err = api
            .register(&Credentials::new("new@example.com", "secret1"))
            .await
            .unwrap_err();
        assert!(err.message().contains("user"));
        assert!(!api.session().is_signed_in());
    }

    #[tokio::test]
    async fn record_form_is_validated_before_create() {
        let (api, transport) = signed_in_api();
        let form = RecordForm {
            name: "www".into(),
            record_type: "A".into(),
            content: "192.0.2.1".into(),
            ttl: "60".into(),
        };

        let err = api.create_record("example.com", &form).await.unwrap_err();
        assert_eq!(err, ConsoleError::Validation("TTL must be at least 300".into()));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn create_record_sends_zone_and_typed_record() {
        let (api, transport) = signed_in_api();
        transport.respond(json!({"record": {"id": "r1", "name": "mail", "type": "MX", "content": "mx.example.com", "ttl": 3600}}));
        let form = RecordForm {
            name: "mail".into(),
            record_type: "mx".into(),
            content: "mx.example.com".into(),
            ttl: "3600".into(),
        };

        let record = api.create_record("example.com", &form).await.unwrap();
        assert_eq!(record.record_type, "MX");
        assert_eq!(transport.procedures(), vec![dns_record::CREATE_DNS_RECORD]);
        assert_eq!(transport.calls()[0].body["type"], "MX");
        assert_eq!(transport.calls()[0].headers.get(http::header::AUTHORIZATION).unwrap(), "Bearer token-1");
    }

    #[tokio::test]
    async fn who_am_i_refreshes_cached_profile() {
        let (api, transport) = signed_in_api();
        transport.respond(json!({"user": {"id": "u1", "email": "alice@example.com", "avatar": "https://a/x.png"}}));

        let user = api.who_am_i().await.unwrap();
        assert_eq!(api.session().user(), Some(user));
    }

    #[tokio::test]
    async fn blank_ids_are_rejected_locally() {
        let (api, transport) = signed_in_api();
        assert!(api.delete_zone(" ").await.is_err());
        assert!(api.delete_record("").await.is_err());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let (api, _) = signed_in_api();
        api.logout();
        assert_eq!(api.session().access_token(), None);
    }
}
