//! Where the harness points.

use reqwest::Url;

use crate::models::error::HarnessError;

pub const DEFAULT_BASE_URL: &str = "https://www.metaweather.com/";
pub const BASE_URL_ENV: &str = "METAWEATHER_BASE_URL";
/// Opt-in switch for the suite that talks to the real service
pub const LIVE_TESTS_ENV: &str = "METAWEATHER_LIVE_TESTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    base_url: String,
}

impl HarnessConfig {
    /// Validates `base_url` and normalizes it to end in `/`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if it is not an absolute URL or it
    /// carries a query string or fragment.
    pub fn new(base_url: &str) -> Result<Self, HarnessError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| HarnessError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(HarnessError::Config(format!("'{base_url}' cannot be a base URL")));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(HarnessError::Config(format!(
                "base URL '{base_url}' must not carry a query or fragment"
            )));
        }

        let mut base_url = parsed.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { base_url })
    }

    /// Reads `METAWEATHER_BASE_URL`, falling back to the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, HarnessError> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Whether the live suite was asked for.
#[must_use]
pub fn live_tests_enabled() -> bool {
    std::env::var(LIVE_TESTS_ENV).is_ok()
}
