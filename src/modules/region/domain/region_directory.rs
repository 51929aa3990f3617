use super::value_objects::{MunicipalityName, RegionCode};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Address lookup: first-level subdivisions and their municipalities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionDirectoryClient: Send + Sync {
    async fn list_regions(&self) -> AppResult<Vec<RegionCode>>;

    async fn list_municipalities(&self, region: &RegionCode) -> AppResult<Vec<MunicipalityName>>;
}
