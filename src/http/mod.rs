use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, info};

use crate::models::error::HarnessError;

/// A GET request relative to the configured base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Renders the absolute URL: `base` + `path` + percent-encoded query.
    ///
    /// `base` is expected to end in `/` and `path` to be relative.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{base}{}", self.path.trim_start_matches('/'));
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// A response captured in full: status, headers and body bytes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Decode`] if the body is not JSON of that shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decodes the body without a target type.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Decode`] if the body is not JSON.
    pub fn json_value(&self) -> Result<serde_json::Value, HarnessError> {
        self.json()
    }

    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        self.json_value()
            .is_ok_and(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
    }

    #[must_use]
    pub fn is_empty_array(&self) -> bool {
        self.json_value()
            .is_ok_and(|v| v.as_array().is_some_and(Vec::is_empty))
    }
}

/// Trait for HTTP client operations to enable testing with mocks.
///
/// Implementations send exactly one request and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a GET for `request` against `base` and capture the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be
    /// read. Non-2xx statuses are not errors.
    async fn get(&self, base: &str, request: &QueryRequest) -> Result<ApiResponse, HarnessError>;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, base: &str, request: &QueryRequest) -> Result<ApiResponse, HarnessError> {
        let url = request.url(base);
        info!("GET {}", url);

        let mut builder = self.client.get(&url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        info!(status = %status, bytes = body.len(), "Received response");
        debug!("Response body: {}", String::from_utf8_lossy(&body));

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
