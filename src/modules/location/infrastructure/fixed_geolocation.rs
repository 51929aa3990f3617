use crate::modules::location::domain::{Coordinate, GeolocationProvider};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;

/// Position known up front, typically from configuration.
pub struct FixedGeolocation {
    position: Option<Coordinate>,
}

impl FixedGeolocation {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let position = match config.device_position {
            Some((latitude, longitude)) => Some(Coordinate::new(latitude, longitude)?),
            None => None,
        };
        Ok(Self::new(position))
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_position(&self) -> AppResult<Coordinate> {
        self.position.ok_or_else(|| {
            AppError::PermissionDenied("No device position configured".to_string())
        })
    }
}
