use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of weather from the forecast endpoint.
///
/// The four numeric fields below are required; the service's other fields are
/// kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub applicable_date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub weather_state_name: Option<String>,
    #[serde(default)]
    pub weather_state_abbr: Option<String>,
    #[serde(default)]
    pub wind_direction_compass: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub the_temp: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub air_pressure: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub predictability: Option<u8>,
}
