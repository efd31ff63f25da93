pub mod auth;
pub mod dns_record;
pub mod zone;

pub use auth::AuthService;
pub use dns_record::DnsRecordService;
pub use zone::ZoneService;
