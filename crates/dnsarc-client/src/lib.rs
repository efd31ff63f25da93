#![allow(non_snake_case)]

//! Client for the DNSARC remote API.
//!
//! Calls are Connect-style JSON unary requests. Every request passes through
//! the registered interceptors; the auth interceptor attaches the session's
//! bearer token and signs the session out when the remote answers
//! `unauthenticated`.

pub mod console;
pub mod error;
pub mod interceptor;
pub mod proto;
pub mod rpc;
pub mod services;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use console::ConsoleApi;
pub use error::{Code, ConnectError};
pub use interceptor::{AuthInterceptor, Interceptor};
pub use rpc::RpcClient;
pub use session::{Session, SessionStore};
pub use transport::{HttpTransport, Transport, UnaryRequest};
