use super::coordinate::Coordinate;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// One-shot device position.
///
/// Fails with `PermissionDenied` when the user refused access and with
/// `NetworkUnavailable` when the position could not be determined.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> AppResult<Coordinate>;
}
