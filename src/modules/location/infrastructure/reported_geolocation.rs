use crate::log_debug;
use crate::modules::location::domain::{Coordinate, GeolocationProvider};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use tokio::sync::watch;

/// Outcome of the browser geolocation API, as reported by the webview.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionReport {
    Position(Coordinate),
    Denied(String),
    Unavailable(String),
}

/// Position supplied later by the webview. `current_position` waits for the
/// first report; callers bound the wait with a timeout.
pub struct ReportedGeolocation {
    reports: watch::Sender<Option<PositionReport>>,
}

impl Default for ReportedGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportedGeolocation {
    pub fn new() -> Self {
        let (reports, _) = watch::channel(None);
        Self { reports }
    }

    pub fn report(&self, report: PositionReport) {
        log_debug!("Device position reported: {:?}", report);
        self.reports.send_replace(Some(report));
    }
}

#[async_trait]
impl GeolocationProvider for ReportedGeolocation {
    async fn current_position(&self) -> AppResult<Coordinate> {
        let mut receiver = self.reports.subscribe();
        let report = {
            let latest = receiver.wait_for(Option::is_some).await.map_err(|_| {
                AppError::InternalError("Position report channel closed".to_string())
            })?;
            latest.clone()
        };

        match report {
            Some(PositionReport::Position(position)) => Ok(position),
            Some(PositionReport::Denied(reason)) => Err(AppError::PermissionDenied(reason)),
            Some(PositionReport::Unavailable(reason)) => Err(AppError::NetworkUnavailable(reason)),
            None => Err(AppError::InternalError(
                "Position report missing".to_string(),
            )),
        }
    }
}
