use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{Code, ConnectError};
use crate::interceptor::Interceptor;
use crate::services::{AuthService, DnsRecordService, ZoneService};
use crate::transport::{Transport, UnaryRequest};

pub struct RpcClient<T> {
    transport: T,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl<T: Transport> RpcClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            interceptors: Vec::new(),
        }
    }

    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// One request, one outcome. Interceptors see the error before the caller does.
    pub async fn call<Req, Resp>(
        &self,
        procedure: &'static str,
        message: &Req,
    ) -> Result<Resp, ConnectError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(message)
            .map_err(|e| ConnectError::new(Code::Internal, format!("failed to encode request: {e}")))?;

        let mut request = UnaryRequest::new(procedure, body);
        for interceptor in &self.interceptors {
            interceptor.on_request(&mut request);
        }

        let result = match self.transport.unary(request).await {
            Ok(value) => serde_json::from_value(value).map_err(|e| {
                ConnectError::new(Code::Internal, format!("failed to decode {procedure} response: {e}"))
            }),
            Err(e) => Err(e),
        };

        if let Err(ref e) = result {
            debug!(procedure, code = %e.code, "unary call failed");
            for interceptor in &self.interceptors {
                interceptor.on_error(procedure, e);
            }
        }
        result
    }

    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService::new(self)
    }

    pub fn zones(&self) -> ZoneService<'_, T> {
        ZoneService::new(self)
    }

    pub fn records(&self) -> DnsRecordService<'_, T> {
        DnsRecordService::new(self)
    }
}
