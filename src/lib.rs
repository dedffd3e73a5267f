//! Query harness for the `MetaWeather` location and forecast API.
//!
//! The crate issues one-shot GET requests against the service and hands the
//! raw response back for assertion. Nothing is retried or cached.

pub mod config;
pub mod http;
pub mod models;
pub mod queries;
pub mod utils;

pub use config::HarnessConfig;
pub use http::{ApiResponse, HttpClient, QueryRequest, ReqwestClient};
pub use models::error::HarnessError;
pub use models::{ForecastRecord, LocationRecord};
pub use queries::MetaWeather;

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber that writes through the test harness.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Calling this
/// more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
