// Fixtures and assertions shared by the mock-server and live suites.
#![allow(dead_code)]

use anyhow::{Context, Result, ensure};
use metaweather_harness::utils::format_forecast_date;
use metaweather_harness::{ApiResponse, ForecastRecord, LocationRecord};
use reqwest::StatusCode;

pub const NOTTINGHAM_WOEID: u64 = 30720;
pub const SANTA_CRUZ_LATTLONG: &str = "36.96,-122.02";
pub const INVALID_DATE: &str = "2021/12/32";

pub fn nottingham() -> LocationRecord {
    LocationRecord::city("Nottingham", NOTTINGHAM_WOEID, "52.949219,-1.143920")
}

pub fn san_francisco() -> LocationRecord {
    LocationRecord::city("San Francisco", 2_487_956, "37.777119, -122.41964")
}

pub fn london() -> LocationRecord {
    LocationRecord::city("London", 44418, "51.506321,-0.12714")
}

/// The ten cities the service returns around `36.96,-122.02`, nearest first.
pub fn santa_cruz_neighbours() -> Vec<LocationRecord> {
    vec![
        LocationRecord::city_at(1836, "Santa Cruz", 2_488_853, "36.974018,-122.030952"),
        LocationRecord::city_at(43722, "San Jose", 2_488_042, "37.338581,-121.885567"),
        LocationRecord::city_at(49177, "Mountain View", 2_455_920, "37.39999,-122.079552"),
        LocationRecord::city_at(96531, "Oakland", 2_463_583, "37.80508,-122.273071"),
        LocationRecord::city_at(97420, "San Francisco", 2_487_956, "37.777119, -122.41964"),
        LocationRecord::city_at(185_820, "Sacramento", 2_486_340, "38.579060,-121.491013"),
        LocationRecord::city_at(200_162, "Fresno", 2_407_517, "36.740681,-119.785728"),
        LocationRecord::city_at(287_032, "Lake Tahoe", 23_511_744, "39.021400,-120.044823"),
        LocationRecord::city_at(322_803, "Bakersfield", 2_358_492, "35.351189,-119.024063"),
        LocationRecord::city_at(469_934, "Los Angeles", 2_442_047, "34.053490,-118.245323"),
    ]
}

/// Checks a forecast response for `date`: 200, non-empty, first entry on
/// that date with the numeric fields present.
pub fn assert_forecast_for(response: &ApiResponse, date: &str) -> Result<ForecastRecord> {
    ensure!(
        response.status == StatusCode::OK,
        "forecast status was {}",
        response.status
    );

    let forecasts: Vec<ForecastRecord> = response.json().context("forecast body")?;
    let first = forecasts.into_iter().next().context("forecast list was empty")?;
    ensure!(
        format_forecast_date(first.applicable_date) == date,
        "applicable_date {} does not match {}",
        first.applicable_date,
        date
    );
    ensure!(first.min_temp.is_finite() && first.max_temp.is_finite());
    ensure!(first.wind_speed.is_finite() && first.humidity.is_finite());

    Ok(first)
}

/// Raw JSON the way the service sends a Nottingham name search.
pub const NOTTINGHAM_SEARCH_BODY: &str =
    r#"[{"title":"Nottingham","location_type":"City","woeid":30720,"latt_long":"52.949219,-1.143920"}]"#;

/// Raw JSON for a search on "san"; San Francisco comes first.
pub const SAN_SEARCH_BODY: &str = r#"[
{"title":"San Francisco","location_type":"City","woeid":2487956,"latt_long":"37.777119, -122.41964"},
{"title":"San Diego","location_type":"City","woeid":2487889,"latt_long":"32.715691,-117.161720"},
{"title":"San Jose","location_type":"City","woeid":2488042,"latt_long":"37.338581,-121.885567"}
]"#;

/// Raw JSON for a search on "london".
pub const LONDON_SEARCH_BODY: &str =
    r#"[{"title":"London","location_type":"City","woeid":44418,"latt_long":"51.506321,-0.12714"}]"#;

/// Raw JSON for the proximity search around Santa Cruz.
pub const SANTA_CRUZ_PROXIMITY_BODY: &str = r#"[
{"distance":1836,"title":"Santa Cruz","location_type":"City","woeid":2488853,"latt_long":"36.974018,-122.030952"},
{"distance":43722,"title":"San Jose","location_type":"City","woeid":2488042,"latt_long":"37.338581,-121.885567"},
{"distance":49177,"title":"Mountain View","location_type":"City","woeid":2455920,"latt_long":"37.39999,-122.079552"},
{"distance":96531,"title":"Oakland","location_type":"City","woeid":2463583,"latt_long":"37.80508,-122.273071"},
{"distance":97420,"title":"San Francisco","location_type":"City","woeid":2487956,"latt_long":"37.777119, -122.41964"},
{"distance":185820,"title":"Sacramento","location_type":"City","woeid":2486340,"latt_long":"38.579060,-121.491013"},
{"distance":200162,"title":"Fresno","location_type":"City","woeid":2407517,"latt_long":"36.740681,-119.785728"},
{"distance":287032,"title":"Lake Tahoe","location_type":"City","woeid":23511744,"latt_long":"39.021400,-120.044823"},
{"distance":322803,"title":"Bakersfield","location_type":"City","woeid":2358492,"latt_long":"35.351189,-119.024063"},
{"distance":469934,"title":"Los Angeles","location_type":"City","woeid":2442047,"latt_long":"34.053490,-118.245323"}
]"#;

/// A forecast body whose first entry falls on `date` (`YYYY/MM/DD`).
pub fn forecast_body(date: &str) -> String {
    let iso = date.replace('/', "-");
    format!(
        r#"[{{"id":5064523418222592,"weather_state_name":"Light Rain","weather_state_abbr":"lr",
"wind_direction_compass":"SW","created":"{iso}T06:32:02.123456Z","applicable_date":"{iso}",
"min_temp":4.125,"max_temp":9.02,"the_temp":8.3,"wind_speed":11.2,"wind_direction":224.5,
"air_pressure":1004.0,"humidity":87,"visibility":9.4,"predictability":75}},
{{"id":5064523418222593,"applicable_date":"{iso}","min_temp":3.9,"max_temp":8.8,
"wind_speed":10.7,"humidity":85}}]"#
    )
}
