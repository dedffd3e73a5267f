use tracing::info;

use super::{JSON_CONTENT_TYPE, MetaWeather};
use crate::http::{ApiResponse, HttpClient, QueryRequest};
use crate::models::error::HarnessError;

impl<C: HttpClient> MetaWeather<C> {
    /// `GET api/location/<woeid>/<date>/`.
    ///
    /// `date` goes into the path exactly as given (`YYYY/MM/DD`), so
    /// impossible dates reach the service and come back as whatever status it
    /// picks.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be completed.
    pub async fn forecast_for_date(&self, woeid: u64, date: &str) -> Result<ApiResponse, HarnessError> {
        info!("Requesting forecast for woeid {} on {}", woeid, date);
        let request = QueryRequest::new(format!("api/location/{woeid}/{date}/"))
            .header("Content-Type", JSON_CONTENT_TYPE);
        self.get(&request).await
    }
}
