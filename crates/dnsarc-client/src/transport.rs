use std::future::Future;
use std::time::Duration;

use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::ConnectError;

/// A unary call before it is put on the wire.
#[derive(Clone, Debug)]
pub struct UnaryRequest {
    /// `package.Service/Method`
    pub procedure: &'static str,
    pub headers: HeaderMap,
    pub body: Value,
}

impl UnaryRequest {
    pub fn new(procedure: &'static str, body: Value) -> Self {
        Self {
            procedure,
            headers: HeaderMap::new(),
            body,
        }
    }
}

/// Moves one unary request to the remote and back.
pub trait Transport: Send + Sync {
    fn unary(
        &self,
        request: UnaryRequest,
    ) -> impl Future<Output = Result<Value, ConnectError>> + Send;
}

/// Connect protocol over HTTP/1.1 with JSON bodies.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConnectError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, procedure: &str) -> String {
        format!("{}/{}", self.base_url, procedure)
    }
}

impl Transport for HttpTransport {
    async fn unary(&self, request: UnaryRequest) -> Result<Value, ConnectError> {
        let url = self.url(request.procedure);
        debug!(procedure = request.procedure, "sending unary request");

        let response = self
            .client
            .post(&url)
            .headers(request.headers)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("Connect-Protocol-Version", HeaderValue::from_static("1"))
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ConnectError::from_response(status, &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_str(&body).map_err(|e| {
            ConnectError::new(
                crate::error::Code::Internal,
                format!("invalid response from {url}: {e}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_procedure() {
        let transport =
            HttpTransport::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
        assert_eq!(
            transport.url("zone.v1.ZoneService/ListZones"),
            "http://localhost:8080/zone.v1.ZoneService/ListZones"
        );
    }
}
