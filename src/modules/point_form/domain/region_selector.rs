//! Cascading state/city selection.
//!
//! The municipality options always belong to the selected region. Every
//! region change resets both the municipality choice and its options, and a
//! municipality response is only applied if it answers the latest selection.
//! Re-selecting a region issues a new ticket, so an older lookup for the same
//! region is stale too.

use crate::modules::region::{MunicipalityName, RegionCode};
use crate::shared::errors::{AppError, AppResult};
use serde::Serialize;

/// Ticket for one municipality fetch, tagged with the region and the
/// selection generation it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityRequest {
    region: RegionCode,
    generation: u64,
}

impl MunicipalityRequest {
    pub fn region(&self) -> &RegionCode {
        &self.region
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct RegionSelector {
    regions: Vec<RegionCode>,
    selected_region: Option<RegionCode>,
    municipalities: Vec<MunicipalityName>,
    selected_municipality: Option<MunicipalityName>,
    loading_municipalities: bool,
    #[serde(skip)]
    generation: u64,
}

impl RegionSelector {
    pub fn set_regions(&mut self, regions: Vec<RegionCode>) {
        self.regions = regions;
    }

    pub fn regions(&self) -> &[RegionCode] {
        &self.regions
    }

    pub fn selected_region(&self) -> Option<&RegionCode> {
        self.selected_region.as_ref()
    }

    pub fn municipalities(&self) -> &[MunicipalityName] {
        &self.municipalities
    }

    pub fn selected_municipality(&self) -> Option<&MunicipalityName> {
        self.selected_municipality.as_ref()
    }

    pub fn is_loading_municipalities(&self) -> bool {
        self.loading_municipalities
    }

    /// Select a region (or none). Returns the fetch to issue, if any.
    pub fn select_region(
        &mut self,
        region: Option<RegionCode>,
    ) -> AppResult<Option<MunicipalityRequest>> {
        if let Some(code) = &region {
            if !self.regions.contains(code) {
                return Err(AppError::ValidationError(format!(
                    "Unknown region '{}'",
                    code
                )));
            }
        }

        self.municipalities.clear();
        self.selected_municipality = None;
        self.selected_region = region.clone();
        self.loading_municipalities = region.is_some();
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        Ok(region.map(|region| MunicipalityRequest { region, generation }))
    }

    fn check_current(&self, request: &MunicipalityRequest) -> AppResult<()> {
        if self.selected_region.as_ref() != Some(&request.region) {
            return Err(AppError::StaleResponse(format!(
                "Municipalities for {} arrived after the region changed",
                request.region
            )));
        }
        if self.generation != request.generation {
            return Err(AppError::StaleResponse(format!(
                "Municipalities for {} were superseded by a newer lookup",
                request.region
            )));
        }
        Ok(())
    }

    /// Replace the municipality options with a completed fetch.
    pub fn apply_municipalities(
        &mut self,
        request: &MunicipalityRequest,
        municipalities: Vec<MunicipalityName>,
    ) -> AppResult<()> {
        self.check_current(request)?;
        self.municipalities = municipalities;
        self.loading_municipalities = false;
        Ok(())
    }

    /// Record a failed fetch: the region stays selected with no options.
    pub fn fail_municipalities(&mut self, request: &MunicipalityRequest) -> AppResult<()> {
        self.check_current(request)?;
        self.municipalities.clear();
        self.loading_municipalities = false;
        Ok(())
    }

    pub fn select_municipality(&mut self, municipality: Option<MunicipalityName>) -> AppResult<()> {
        let Some(name) = municipality else {
            self.selected_municipality = None;
            return Ok(());
        };

        let Some(region) = &self.selected_region else {
            return Err(AppError::InvalidOperation(
                "Select a region before choosing a municipality".to_string(),
            ));
        };
        if !self.municipalities.contains(&name) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a municipality of {}",
                name, region
            )));
        }

        self.selected_municipality = Some(name);
        Ok(())
    }
}
