use serde::{Deserialize, Serialize};

use super::error::HarnessError;

/// One entry of a location search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Distance in meters from the searched coordinate, proximity search only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
    pub title: String,
    pub location_type: String,
    pub woeid: u64,
    /// `"lat,long"` exactly as the service spells it
    pub latt_long: String,
}

impl LocationRecord {
    /// Builds a record as returned by a name search.
    #[must_use]
    pub fn city(title: &str, woeid: u64, latt_long: &str) -> Self {
        Self {
            distance: None,
            title: title.to_string(),
            location_type: "City".to_string(),
            woeid,
            latt_long: latt_long.to_string(),
        }
    }

    /// Same as [`LocationRecord::city`] with a proximity distance attached.
    #[must_use]
    pub fn city_at(distance: u64, title: &str, woeid: u64, latt_long: &str) -> Self {
        Self {
            distance: Some(distance),
            ..Self::city(title, woeid, latt_long)
        }
    }

    /// Parses `latt_long` into a `(latitude, longitude)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Decode`] if the field is not two comma
    /// separated numbers.
    pub fn coordinates(&self) -> Result<(f64, f64), HarnessError> {
        let (lat, long) = self
            .latt_long
            .split_once(',')
            .ok_or_else(|| HarnessError::Decode(format!("no comma in latt_long '{}'", self.latt_long)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| HarnessError::Decode(format!("bad coordinate '{part}': {e}")))
        };

        Ok((parse(lat)?, parse(long)?))
    }
}

/// True when every record carries a distance and distances strictly increase.
#[must_use]
pub fn is_ordered_by_distance(records: &[LocationRecord]) -> bool {
    let distances: Option<Vec<u64>> = records.iter().map(|r| r.distance).collect();
    distances.is_some_and(|d| d.windows(2).all(|pair| pair[0] < pair[1]))
}
