//! Shared request plumbing for the scheduling API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shiftbook_core::config::ApiConfig;
use shiftbook_core::credentials::CredentialStore;

use crate::error::{ClientError, ClientResult};

/// Typed client for the scheduling service. Cheap to clone; all clones share
/// the underlying connection pool and credential store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// ## Summary
    /// Builds a client for the configured API endpoint. A token already held
    /// by the credential store is attached to every request.
    ///
    /// ## Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialStore>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "Issuing API request");

        let mut builder = self.http.request(method, url);
        if let Some(token) = self.credentials.token()? {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, path)?.json(body).send().await?;
        Self::decode(response).await
    }

    /// Sends a body and checks the status, discarding any response payload.
    pub(crate) async fn send_json_status<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path)?.json(body).send().await?;
        Self::check(response).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        Self::check(response).await.map(|_| ())
    }

    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %message, "API request rejected");
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|error| ClientError::Decode(format!("{error} in: {body}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftbook_core::constants::{EMPLOYEE_ROUTE, LOGIN_ROUTE, SCHEDULE_ROUTE};
    use shiftbook_core::credentials::MemoryCredentialStore;

    fn client(base_url: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        ApiClient::new(config, Arc::new(MemoryCredentialStore::new())).expect("client builds")
    }

    #[test]
    fn test_url_joins_routes_onto_base() {
        let client = client("http://localhost:5113/api");
        assert_eq!(
            client.url(EMPLOYEE_ROUTE),
            "http://localhost:5113/api/Employee"
        );
        assert_eq!(
            client.url(SCHEDULE_ROUTE),
            "http://localhost:5113/api/Schedule"
        );
        assert_eq!(
            client.url(LOGIN_ROUTE),
            "http://localhost:5113/api/auth/login"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let client = client("http://localhost:5113/api/");
        assert_eq!(
            client.url(EMPLOYEE_ROUTE),
            "http://localhost:5113/api/Employee"
        );
    }

    #[test]
    fn test_item_urls_embed_identifiers() {
        let client = client("http://localhost:5113/api");
        assert_eq!(
            client.url(&format!("{SCHEDULE_ROUTE}/42")),
            "http://localhost:5113/api/Schedule/42"
        );
    }
}
