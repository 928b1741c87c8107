//! HTTP client for the jsonplaceholder users endpoint.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::intercept::{truncate_body, Interceptor};
use crate::types::User;
use crate::Error;

/// Path of the real users collection.
pub const USERS_PATH: &str = "/users";
/// Misspelled path used by the demo to force a 404.
pub const MISSPELLED_USERS_PATH: &str = "/user";

/// HTTP client for the users endpoint.
///
/// Each request is routed through the [`Interceptor`] and, on failure,
/// re-issued once more by the client itself. The two retry layers are
/// independent, so a persistently failing call makes up to four transport
/// attempts. Each attempt builds a fresh `reqwest::Client` with a
/// 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://jsonplaceholder.typicode.com`.
    base_api_url: String,
    interceptor: Interceptor,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the live jsonplaceholder API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://jsonplaceholder.typicode.com".to_string(),
            interceptor: Interceptor::new(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            interceptor: Interceptor::new(),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Issues a GET, retrying the whole intercepted pipeline once on
    /// failure. The retried attempt's error is surfaced unchanged.
    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        match self.get_once(path).await {
            Ok(value) => Ok(value),
            Err(first) => {
                tracing::warn!("GET {} failed ({}), retrying once", path, first);
                self.get_once(path).await
            }
        }
    }

    async fn get_once<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let request = http.get(url).build().map_err(|e| {
            tracing::error!("Failed to build request: {}", e);
            Error::RequestFailed
        })?;

        let resp = self.interceptor.execute(&http, request).await?;
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })
    }

    /// Fetches the users collection from the deliberately misspelled
    /// endpoint. Guaranteed to fail with a 404 against the live API; the
    /// demo relies on this to exercise the whole error path.
    pub async fn get_users(&self) -> Result<Vec<User>, Error> {
        self.get(MISSPELLED_USERS_PATH).await
    }

    /// Fetches the users collection from the correct endpoint.
    pub async fn get_users_correct(&self) -> Result<Vec<User>, Error> {
        self.get(USERS_PATH).await
    }
}
