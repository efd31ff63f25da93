use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Remote JSON omits zero values, so every field falls back to its default.

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub avatar: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Single upper-case letter shown when the user has no avatar.
    pub fn initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    pub id: String,
    pub zone_name: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: i32,
    pub weight: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Record types the console can create.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::A,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordType::A => "A Record",
            RecordType::AAAA => "AAAA Record",
            RecordType::CNAME => "CNAME Record",
            RecordType::MX => "MX Record",
            RecordType::TXT => "TXT Record",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            other => Err(format!("unsupported record type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_decodes_with_missing_fields() {
        let zone: Zone = serde_json::from_str(r#"{"id":"z1","zoneName":"example.com"}"#).unwrap();
        assert_eq!(zone.zone_name, "example.com");
        assert!(!zone.is_active);
        assert!(zone.created_at.is_empty());
    }

    #[test]
    fn record_type_field_uses_wire_name() {
        let record: DnsRecord = serde_json::from_str(
            r#"{"id":"r1","name":"www","type":"CNAME","content":"example.com","ttl":300}"#,
        )
        .unwrap();
        assert_eq!(record.record_type, "CNAME");
        assert_eq!(record.ttl, 300);
        assert_eq!(record.weight, 0);
    }

    #[test]
    fn record_type_parses_case_insensitively() {
        assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::AAAA));
        assert_eq!(" mx ".parse::<RecordType>(), Ok(RecordType::MX));
        assert!("SRV".parse::<RecordType>().is_err());
    }

    #[test]
    fn user_initial_falls_back_to_empty() {
        let user = User {
            email: "alice@example.com".into(),
            ..Default::default()
        };
        assert_eq!(user.initial(), "A");
        assert_eq!(User::default().initial(), "");
    }
}
