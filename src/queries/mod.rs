//! The query harness: one GET per call, response handed back untouched.

pub mod forecast;
pub mod search;

use tracing::debug;

use crate::config::HarnessConfig;
use crate::http::{ApiResponse, HttpClient, QueryRequest, ReqwestClient};
use crate::models::error::HarnessError;

pub(crate) const SEARCH_PATH: &str = "api/location/search/";
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the `MetaWeather` location API.
///
/// Stateless apart from the base URL: every method issues exactly one
/// request, except [`MetaWeather::resolve_identifier`] which issues one
/// search.
pub struct MetaWeather<C = ReqwestClient> {
    config: HarnessConfig,
    client: C,
}

impl MetaWeather<ReqwestClient> {
    /// Harness against the endpoint named by the environment.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if `METAWEATHER_BASE_URL` is invalid.
    pub fn from_env() -> Result<Self, HarnessError> {
        Ok(Self::new(HarnessConfig::from_env()?, ReqwestClient::default()))
    }

    /// Harness against `base_url`, e.g. a mock server.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if `base_url` is invalid.
    pub fn with_base_url(base_url: &str) -> Result<Self, HarnessError> {
        Ok(Self::new(HarnessConfig::new(base_url)?, ReqwestClient::default()))
    }
}

impl<C: HttpClient> MetaWeather<C> {
    #[must_use]
    pub const fn new(config: HarnessConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Sends `request` as is.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Transport`] on network failure. Any HTTP status
    /// is a successful return.
    pub async fn get(&self, request: &QueryRequest) -> Result<ApiResponse, HarnessError> {
        debug!(path = %request.path, query = ?request.query, "Issuing request");
        self.client.get(self.config.base_url(), request).await
    }
}
