use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};

/// Map center used when the device position is unavailable or denied
/// (Pernambuco, Brazil).
pub const DEFAULT_MAP_CENTER: Coordinate = Coordinate {
    latitude: -8.2648232,
    longitude: -35.9896734,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_latitude(self.latitude)?;
        Validator::validate_longitude(self.longitude)
    }
}
