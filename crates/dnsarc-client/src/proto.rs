//! Request and response messages, in the remote's JSON field naming.

use dnsarc_types::{DnsRecord, User, Zone};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize)]
pub struct Empty {}

// auth.v1

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Shared by `Login` and `Register`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: Option<User>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhoAmIResponse {
    pub user: Option<User>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleLoginUrlResponse {
    pub url: String,
}

// zone.v1

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneRequest {
    pub zone_name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateZoneResponse {
    pub zone: Option<Zone>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListZonesResponse {
    pub zones: Vec<Zone>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneNameRequest {
    pub zone_name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct IdRequest {
    pub id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetZoneResponse {
    pub zone: Option<Zone>,
}

// dns_record.v1

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordRequest {
    pub zone_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: i32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDnsRecordRequest {
    pub id: String,
    pub content: String,
    pub ttl: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordResponse {
    pub record: Option<DnsRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDnsRecordsResponse {
    pub records: Vec<DnsRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeleteResponse {}
