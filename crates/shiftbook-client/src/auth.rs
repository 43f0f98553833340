//! Credential exchange against the auth endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use shiftbook_core::constants::{LOGIN_ROUTE, REGISTER_ROUTE};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Login request payload
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response payload
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration request payload
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl ApiClient {
    /// ## Summary
    /// Exchanges credentials for a bearer token.
    ///
    /// ## Side Effects
    /// A successful login writes the token through the credential store, so
    /// subsequent calls on any clone of this client carry it.
    ///
    /// ## Errors
    /// Returns an error on transport failure, rejection (wrong credentials
    /// included), a malformed body, or a credential-store failure.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self
            .send_json(Method::POST, LOGIN_ROUTE, &LoginRequest { email, password })
            .await?;

        self.credentials().store(&response.token)?;
        tracing::info!(%email, "Logged in, token cached");
        Ok(response)
    }

    /// ## Summary
    /// Registers a new account. Does not log in; the caller follows up with
    /// `login` to obtain a token.
    ///
    /// ## Errors
    /// Returns an error on transport failure or rejection.
    pub async fn register(&self, email: &str, password: &str) -> ClientResult<()> {
        self.send_json_status(Method::POST, REGISTER_ROUTE, &RegisterRequest { email, password })
            .await
    }

    /// ## Summary
    /// Drops the cached bearer token.
    ///
    /// ## Errors
    /// Returns an error if the credential store cannot be updated.
    pub fn logout(&self) -> ClientResult<()> {
        self.credentials().clear()?;
        Ok(())
    }
}
