use reqwest::StatusCode;
use tracing::info;

use super::{JSON_CONTENT_TYPE, MetaWeather, SEARCH_PATH};
use crate::http::{ApiResponse, HttpClient, QueryRequest};
use crate::models::LocationRecord;
use crate::models::error::HarnessError;

impl<C: HttpClient> MetaWeather<C> {
    /// `GET api/location/search/?query=<term>`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be completed.
    pub async fn search(&self, term: &str) -> Result<ApiResponse, HarnessError> {
        info!("Searching locations by name: {}", term);
        let request = QueryRequest::new(SEARCH_PATH)
            .query("query", term)
            .header("Content-Type", JSON_CONTENT_TYPE);
        self.get(&request).await
    }

    /// `GET api/location/search/?lattlong=<coord>`, `coord` being `"lat,long"`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be completed.
    pub async fn search_by_proximity(&self, coord: &str) -> Result<ApiResponse, HarnessError> {
        info!("Searching locations near: {}", coord);
        let request = QueryRequest::new(SEARCH_PATH).query("lattlong", coord);
        self.get(&request).await
    }

    /// Search with whatever parameters the caller names, recognised or not.
    ///
    /// The service answers keys it does not know with 403 and `{}`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be completed.
    pub async fn search_by_unsupported_param<K, V>(
        &self,
        params: &[(K, V)],
    ) -> Result<ApiResponse, HarnessError>
    where
        K: AsRef<str> + Sync,
        V: AsRef<str> + Sync,
    {
        let request = params
            .iter()
            .fold(QueryRequest::new(SEARCH_PATH), |request, (k, v)| {
                request.query(k.as_ref(), v.as_ref())
            })
            .header("Accept", JSON_CONTENT_TYPE);
        info!("Searching locations with raw parameters: {:?}", request.query);
        self.get(&request).await
    }

    /// Searches `term` and returns the WOEID of the first match.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::UnexpectedStatus`] if the search is not a 200.
    /// - [`HarnessError::NoResults`] if it matched nothing.
    /// - [`HarnessError::Decode`] if the body is not a list of locations.
    /// - [`HarnessError::Transport`] if the request failed.
    pub async fn resolve_identifier(&self, term: &str) -> Result<u64, HarnessError> {
        let response = self.search(term).await?;
        if response.status != StatusCode::OK {
            return Err(HarnessError::UnexpectedStatus {
                expected: StatusCode::OK,
                actual: response.status,
            });
        }

        let locations: Vec<LocationRecord> = response.json()?;
        let first = locations
            .first()
            .ok_or_else(|| HarnessError::NoResults(term.to_string()))?;

        info!("Resolved '{}' to woeid {}", term, first.woeid);
        Ok(first.woeid)
    }
}
