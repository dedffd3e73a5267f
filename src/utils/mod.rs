//! Date helpers for the forecast endpoint.

use chrono::{Duration, NaiveDate, Utc};

/// The UTC calendar date 24 hours from now.
#[must_use]
pub fn tomorrow() -> NaiveDate {
    (Utc::now() + Duration::hours(24)).date_naive()
}

/// Formats a date as the forecast path expects it: `YYYY/MM/DD`.
#[must_use]
pub fn format_forecast_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
