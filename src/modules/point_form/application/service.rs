use crate::modules::catalog::{HttpItemCatalogClient, ItemCatalogClient};
use crate::modules::location::{Coordinate, GeolocationProvider};
use crate::modules::point_form::domain::{FormSnapshot, FormState, Notice};
use crate::modules::region::{
    IbgeRegionDirectoryClient, MunicipalityName, RegionCode, RegionDirectoryClient,
};
use crate::modules::submission::{
    ContactField, HttpSubmissionClient, SubmissionClient, SubmissionReceipt,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_debug, log_error, log_info, log_warn};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Where the host should go after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub enum NavigationTarget {
    Landing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub navigate_to: NavigationTarget,
    pub receipt: SubmissionReceipt,
}

/// Owns the registration form: state, collaborators and every user operation.
///
/// The state lock is never held across a remote call, so user events keep
/// flowing while fetches are in flight.
pub struct CollectionPointForm {
    catalog: Arc<dyn ItemCatalogClient>,
    regions: Arc<dyn RegionDirectoryClient>,
    geolocation: Arc<dyn GeolocationProvider>,
    submissions: Arc<dyn SubmissionClient>,
    geolocation_timeout: Duration,
    state: Mutex<FormState>,
}

impl CollectionPointForm {
    pub fn new(
        catalog: Arc<dyn ItemCatalogClient>,
        regions: Arc<dyn RegionDirectoryClient>,
        geolocation: Arc<dyn GeolocationProvider>,
        submissions: Arc<dyn SubmissionClient>,
    ) -> Self {
        Self {
            catalog,
            regions,
            geolocation,
            submissions,
            geolocation_timeout: AppConfig::default().geolocation_timeout,
            state: Mutex::new(FormState::default()),
        }
    }

    /// Wire the HTTP collaborators described by `config`.
    pub fn from_config(
        config: &AppConfig,
        geolocation: Arc<dyn GeolocationProvider>,
    ) -> AppResult<Self> {
        let catalog: Arc<dyn ItemCatalogClient> = Arc::new(HttpItemCatalogClient::new(config)?);
        let regions: Arc<dyn RegionDirectoryClient> =
            Arc::new(IbgeRegionDirectoryClient::new(config)?);
        let submissions: Arc<dyn SubmissionClient> = Arc::new(HttpSubmissionClient::new(config)?);

        Ok(Self::new(catalog, regions, geolocation, submissions)
            .with_geolocation_timeout(config.geolocation_timeout))
    }

    pub fn with_geolocation_timeout(mut self, timeout: Duration) -> Self {
        self.geolocation_timeout = timeout;
        self
    }

    /// Load the device position, item catalog and region list concurrently.
    /// Each failure degrades its own slice and leaves a notice. Runs once.
    pub async fn initialize(&self) -> FormSnapshot {
        {
            let mut state = self.state.lock().await;
            if !state.mark_initialized() {
                log_debug!("Form already initialized");
                return state.snapshot();
            }
        }

        let timer = TimedOperation::new("form initialization");
        let (position, items, regions) = futures::join!(
            self.device_position(),
            self.catalog.list_items(),
            self.regions.list_regions()
        );

        let mut state = self.state.lock().await;
        match position {
            Ok(position) => state.pin.recenter(position),
            Err(e) => {
                log_warn!("Device position unavailable: {}", e);
                state.push_notice(Notice::warning(
                    "Could not determine your location; the map starts at the default position",
                ));
            }
        }
        match items {
            Ok(items) => state.items.set_catalog(items),
            Err(e) => {
                LogContext::error_with_context(&e, "Loading item categories");
                state.push_notice(Notice::warning(format!(
                    "Could not load item categories: {}",
                    e
                )));
            }
        }
        match regions {
            Ok(regions) => state.regions.set_regions(regions),
            Err(e) => {
                LogContext::error_with_context(&e, "Loading states");
                state.push_notice(Notice::warning(format!("Could not load states: {}", e)));
            }
        }

        timer.finish_with_info(&format!(
            "{} items, {} regions",
            state.items.catalog().len(),
            state.regions.regions().len()
        ));
        state.snapshot()
    }

    async fn device_position(&self) -> AppResult<Coordinate> {
        let position = tokio::time::timeout(
            self.geolocation_timeout,
            self.geolocation.current_position(),
        )
        .await
        .unwrap_or_else(|_| {
            Err(AppError::NetworkUnavailable(
                "Timed out waiting for the device position".to_string(),
            ))
        })?;
        position.validate()?;
        Ok(position)
    }

    /// Apply one user edit under the lock, moving the form out of `Pristine`.
    async fn edit<T, F>(&self, event: &str, apply: F) -> AppResult<T>
    where
        F: FnOnce(&mut FormState) -> AppResult<T>,
    {
        let mut state = self.state.lock().await;
        state.phase.ensure_editable()?;
        let result = apply(&mut state)?;
        state.phase.mark_edited();
        LogContext::form_event(event, None);
        Ok(result)
    }

    /// Select a state, or none. Clears the city and its options, then loads
    /// the cities of the new state. A response that arrives after the user
    /// picked another state is dropped.
    pub async fn select_region(&self, region: Option<RegionCode>) -> AppResult<FormSnapshot> {
        let request = self
            .edit("region selected", |state| state.regions.select_region(region))
            .await?;
        let Some(request) = request else {
            return Ok(self.snapshot().await);
        };

        let fetched = self.regions.list_municipalities(request.region()).await;

        let mut state = self.state.lock().await;
        let outcome = match fetched {
            Ok(municipalities) => state.regions.apply_municipalities(&request, municipalities),
            Err(e) => match state.regions.fail_municipalities(&request) {
                Ok(()) => {
                    log_warn!("Loading cities of {} failed: {}", request.region(), e);
                    state.push_notice(Notice::warning(format!(
                        "Could not load cities for {}: {}",
                        request.region(),
                        e
                    )));
                    Ok(())
                }
                Err(stale) => Err(stale),
            },
        };

        match outcome {
            Ok(()) => {}
            Err(AppError::StaleResponse(reason)) => {
                log_debug!("Discarded municipality response: {}", reason)
            }
            Err(e) => return Err(e),
        }
        Ok(state.snapshot())
    }

    pub async fn select_municipality(
        &self,
        municipality: Option<MunicipalityName>,
    ) -> AppResult<FormSnapshot> {
        let mut state = self.state.lock().await;
        state.phase.ensure_editable()?;
        state.regions.select_municipality(municipality)?;
        state.phase.mark_edited();
        LogContext::form_event("municipality selected", None);
        Ok(state.snapshot())
    }

    pub async fn update_contact_field(
        &self,
        field: ContactField,
        value: String,
    ) -> AppResult<FormSnapshot> {
        let mut state = self.state.lock().await;
        state.phase.ensure_editable()?;
        state.contact.set(field, value);
        state.phase.mark_edited();
        Ok(state.snapshot())
    }

    pub async fn toggle_item(&self, id: i32) -> AppResult<FormSnapshot> {
        let mut state = self.state.lock().await;
        state.phase.ensure_editable()?;
        let selected = state.items.toggle(id)?;
        state.phase.mark_edited();
        LogContext::form_event(
            "item toggled",
            Some(&format!("{} {}", id, if selected { "on" } else { "off" })),
        );
        Ok(state.snapshot())
    }

    /// Pin dropped on the map. The initial position is left untouched.
    pub async fn update_pin(&self, position: Coordinate) -> AppResult<FormSnapshot> {
        self.edit("pin moved", |state| state.pin.drag_end(position))
            .await?;
        Ok(self.snapshot().await)
    }

    /// Send the registration. On failure every field keeps its value and the
    /// form goes back to `Editing` so the user can try again.
    pub async fn submit(&self) -> AppResult<SubmitOutcome> {
        let record = {
            let mut state = self.state.lock().await;
            state.phase.begin_submit()?;
            match state.compose_record() {
                Ok(record) => record,
                Err(e) => {
                    state.phase.finish_submit(false);
                    state.push_notice(Notice::warning(e.to_string()));
                    return Err(e);
                }
            }
        };

        LogContext::form_event("submitting", Some(&record.contact.name));
        let result = self.submissions.create_point(&record).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(receipt) => {
                state.phase.finish_submit(true);
                state.push_notice(Notice::success("Collection point registered"));
                log_info!("Collection point submitted");
                Ok(SubmitOutcome {
                    navigate_to: NavigationTarget::Landing,
                    receipt,
                })
            }
            Err(e) => {
                state.phase.finish_submit(false);
                log_error!("Collection point submission failed: {}", e);
                state.push_notice(Notice::error(format!(
                    "Could not register the collection point: {}",
                    e
                )));
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn take_notices(&self) -> Vec<Notice> {
        self.state.lock().await.take_notices()
    }
}
