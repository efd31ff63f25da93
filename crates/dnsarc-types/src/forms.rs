//! Form schemas for the console.
//!
//! Every form is validated in the browser before it is submitted and again
//! on the server before the remote call is made. A failed validation never
//! reaches the network.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RecordType;

pub const MAX_NAME_LEN: usize = 255;
pub const MIN_CONTENT_LEN: usize = 2;
pub const MAX_CONTENT_LEN: usize = 255;
pub const MIN_TTL: i32 = 300;
pub const MAX_TTL: i32 = 86400;
pub const DEFAULT_TTL: i32 = 300;
pub const LOGIN_MIN_PASSWORD: usize = 8;
pub const REGISTER_MIN_PASSWORD: usize = 6;

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("domain pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All failures for one submission, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}", summarize(.0))]
pub struct FieldErrors(pub Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_domain(name: &str) -> bool {
    DOMAIN_RE.is_match(name)
}

fn check_content(errors: &mut FieldErrors, content: &str) {
    if char_len(content) < MIN_CONTENT_LEN {
        errors.push("content", "Content is required");
    } else if char_len(content) > MAX_CONTENT_LEN {
        errors.push("content", "Content must be at most 255 characters");
    }
}

fn check_ttl(errors: &mut FieldErrors, raw: &str) -> i32 {
    match raw.trim().parse::<i32>() {
        Ok(ttl) if ttl < MIN_TTL => {
            errors.push("ttl", "TTL must be at least 300");
            ttl
        }
        Ok(ttl) if ttl > MAX_TTL => {
            errors.push("ttl", "TTL must be at most 86400");
            ttl
        }
        Ok(ttl) => ttl,
        Err(_) => {
            errors.push("ttl", "TTL must be a number");
            0
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneForm {
    pub zone_name: String,
}

impl ZoneForm {
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
        }
    }

    /// Returns the zone name to create.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = self.zone_name.as_str();
        if name.is_empty() {
            errors.push("zone_name", "Zone name is required.");
        } else if char_len(name) > MAX_NAME_LEN {
            errors.push("zone_name", "Zone name must be at most 255 characters.");
        } else if !is_valid_domain(name) {
            errors.push("zone_name", "Invalid domain name format.");
        }
        errors.into_result(self.zone_name.clone())
    }
}

/// Raw create-record input; `ttl` is kept as typed text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    pub name: String,
    pub record_type: String,
    pub content: String,
    pub ttl: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            record_type: RecordType::A.to_string(),
            content: String::new(),
            ttl: DEFAULT_TTL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub record_type: RecordType,
    pub content: String,
    pub ttl: i32,
}

impl RecordForm {
    pub fn validate(&self) -> Result<NewRecord, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() {
            errors.push("name", "Name is required");
        } else if char_len(&self.name) > MAX_NAME_LEN {
            errors.push("name", "Name must be at most 255 characters");
        }

        let recordType = if self.record_type.trim().is_empty() {
            errors.push("type", "Type is required");
            RecordType::default()
        } else {
            match self.record_type.parse::<RecordType>() {
                Ok(t) => t,
                Err(e) => {
                    errors.push("type", e);
                    RecordType::default()
                }
            }
        };

        check_content(&mut errors, &self.content);
        let ttl = check_ttl(&mut errors, &self.ttl);

        errors.into_result(NewRecord {
            name: self.name.clone(),
            record_type: recordType,
            content: self.content.clone(),
            ttl,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecordForm {
    pub id: String,
    pub content: String,
    pub ttl: String,
}

impl Default for EditRecordForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            content: String::new(),
            ttl: DEFAULT_TTL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub id: String,
    pub content: String,
    pub ttl: i32,
}

impl EditRecordForm {
    pub fn from_record(record: &crate::models::DnsRecord) -> Self {
        Self {
            id: record.id.clone(),
            content: record.content.clone(),
            ttl: record.ttl.to_string(),
        }
    }

    pub fn validate(&self) -> Result<RecordUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.id.is_empty() {
            errors.push("id", "Record id is required");
        }
        check_content(&mut errors, &self.content);
        let ttl = check_ttl(&mut errors, &self.ttl);
        errors.into_result(RecordUpdate {
            id: self.id.clone(),
            content: self.content.clone(),
            ttl,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate_for_login(&self) -> Result<(), FieldErrors> {
        self.validate(LOGIN_MIN_PASSWORD)
    }

    pub fn validate_for_register(&self) -> Result<(), FieldErrors> {
        self.validate(REGISTER_MIN_PASSWORD)
    }

    fn validate(&self, minPassword: usize) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }
        if char_len(&self.password) < minPassword {
            errors.push(
                "password",
                format!("Password must be at least {minPassword} characters"),
            );
        }
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_name_accepts_domains() {
        assert_eq!(ZoneForm::new("example.com").validate(), Ok("example.com".into()));
        assert!(ZoneForm::new("sub-domain.example.co.uk").validate().is_ok());
    }

    #[test]
    fn zone_name_rejects_bad_format() {
        for bad in ["example", "-bad.com", "bad-.com", "exa mple.com", "example.c", "a..com"] {
            let errors = ZoneForm::new(bad).validate().unwrap_err();
            assert_eq!(errors.get("zone_name"), Some("Invalid domain name format."), "{bad}");
        }
    }

    #[test]
    fn zone_name_is_required() {
        let errors = ZoneForm::default().validate().unwrap_err();
        assert_eq!(errors.get("zone_name"), Some("Zone name is required."));
    }

    #[test]
    fn zone_name_length_is_bounded() {
        let long = format!("{}.com", "a.".repeat(130));
        let errors = ZoneForm::new(long).validate().unwrap_err();
        assert!(errors.get("zone_name").unwrap().contains("255"));
    }

    #[test]
    fn record_form_defaults_are_valid_except_required_fields() {
        let errors = RecordForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("content"), Some("Content is required"));
        assert_eq!(errors.get("ttl"), None);
        assert_eq!(errors.get("type"), None);
    }

    #[test]
    fn record_form_produces_typed_record() {
        let form = RecordForm {
            name: "@".into(),
            record_type: "AAAA".into(),
            content: "2001:db8::1".into(),
            ttl: " 3600 ".into(),
        };
        let record = form.validate().unwrap();
        assert_eq!(record.record_type, RecordType::AAAA);
        assert_eq!(record.ttl, 3600);
    }

    #[test]
    fn ttl_bounds_are_enforced() {
        let mut form = RecordForm {
            name: "www".into(),
            content: "1.2.3.4".into(),
            ..Default::default()
        };
        form.ttl = "299".into();
        assert_eq!(form.validate().unwrap_err().get("ttl"), Some("TTL must be at least 300"));
        form.ttl = "86401".into();
        assert_eq!(form.validate().unwrap_err().get("ttl"), Some("TTL must be at most 86400"));
        form.ttl = "abc".into();
        assert_eq!(form.validate().unwrap_err().get("ttl"), Some("TTL must be a number"));
        form.ttl = "86400".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn edit_form_checks_content_and_ttl() {
        let form = EditRecordForm {
            id: "r1".into(),
            content: "x".into(),
            ttl: "300".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("content"), Some("Content is required"));
        assert_eq!(errors.0.len(), 1);
    }

    #[test]
    fn password_minimum_differs_between_login_and_register() {
        let creds = Credentials::new("bob@example.com", "secret1");
        assert!(creds.validate_for_register().is_ok());
        let errors = creds.validate_for_login().unwrap_err();
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
    }

    #[test]
    fn email_is_checked() {
        let errors = Credentials::new("not-an-email", "longenough").validate_for_login().unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
    }

    #[test]
    fn field_errors_display_joins_messages() {
        let errors = RecordForm::default().validate().unwrap_err();
        assert_eq!(errors.to_string(), "Name is required; Content is required");
    }
}
