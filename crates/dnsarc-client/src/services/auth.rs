use dnsarc_types::User;

use crate::error::ConnectError;
use crate::proto::{CredentialsRequest, Empty, GoogleLoginUrlResponse, TokenResponse, WhoAmIResponse};
use crate::rpc::RpcClient;
use crate::transport::Transport;

pub const LOGIN: &str = "auth.v1.AuthService/Login";
pub const REGISTER: &str = "auth.v1.AuthService/Register";
pub const WHO_AM_I: &str = "auth.v1.AuthService/WhoAmI";
pub const GOOGLE_LOGIN_URL: &str = "auth.v1.AuthService/GoogleLoginURL";

pub struct AuthService<'a, T> {
    rpc: &'a RpcClient<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub(crate) fn new(rpc: &'a RpcClient<T>) -> Self {
        Self { rpc }
    }

    /// Returns the access token and the signed-in user.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), ConnectError> {
        self.exchange(LOGIN, email, password).await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(String, User), ConnectError> {
        self.exchange(REGISTER, email, password).await
    }

    async fn exchange(
        &self,
        procedure: &'static str,
        email: &str,
        password: &str,
    ) -> Result<(String, User), ConnectError> {
        let request = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self.rpc.call(procedure, &request).await?;
        let user = response.user.ok_or_else(|| ConnectError::missing("user"))?;
        if response.access_token.is_empty() {
            return Err(ConnectError::missing("accessToken"));
        }
        Ok((response.access_token, user))
    }

    pub async fn who_am_i(&self) -> Result<User, ConnectError> {
        let response: WhoAmIResponse = self.rpc.call(WHO_AM_I, &Empty::default()).await?;
        response.user.ok_or_else(|| ConnectError::missing("user"))
    }

    /// Where the browser goes to start the external identity flow.
    pub async fn google_login_url(&self) -> Result<String, ConnectError> {
        let response: GoogleLoginUrlResponse =
            self.rpc.call(GOOGLE_LOGIN_URL, &Empty::default()).await?;
        Ok(response.url)
    }
}
