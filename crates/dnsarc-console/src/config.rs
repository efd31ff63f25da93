use serde::Deserialize;

pub const API_URL_ENV: &str = "DNSARC_API_URL";

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub dns: DnsConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

/// The remote DNS management API the console talks to.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
    pub max_age_hours: i64,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DnsConfig {
    pub nameservers: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            timeout_secs: 30,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "dnsarc_session".into(),
            secure: false,
            max_age_hours: 24,
        }
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: vec!["ns1.dnsarc.com".into(), "ns2.dnsarc.com".into()],
        }
    }
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    /// A non-empty override replaces `api.base_url`.
    pub fn with_api_override(mut self, apiUrl: Option<String>) -> Self {
        if let Some(url) = apiUrl.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load(path: &str) -> Config {
    let config = match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    };
    config.with_api_override(std::env::var(API_URL_ENV).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse(
            r#"
            [api]
            base_url = "https://api.dnsarc.com"

            [dns]
            nameservers = ["a.ns.example", "b.ns.example"]
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.dnsarc.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dns.nameservers.len(), 2);
        assert_eq!(config.session.cookie_name, "dnsarc_session");
    }

    #[test]
    fn env_override_wins_unless_blank() {
        let config = Config::default().with_api_override(Some("http://api.internal".into()));
        assert_eq!(config.api.base_url, "http://api.internal");

        let config = Config::default().with_api_override(Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load("/nonexistent/dnsarc.toml");
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse("[server]\nport = \"not a number\"").is_err());
    }
}
