use super::form_phase::FormPhase;
use super::item_selection::ItemSelection;
use super::notice::Notice;
use super::region_selector::RegionSelector;
use crate::modules::location::{MapPin, MapView};
use crate::modules::submission::{ContactInfo, SubmissionRecord};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, Validator};
use serde::Serialize;

/// All mutable state of one form instance.
#[derive(Debug, Default)]
pub struct FormState {
    pub phase: FormPhase,
    pub contact: ContactInfo,
    pub items: ItemSelection,
    pub regions: RegionSelector,
    pub pin: MapPin,
    notices: Vec<Notice>,
    initialized: bool,
}

/// Read-only view handed to the host for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub can_submit: bool,
    pub contact: ContactInfo,
    pub items: ItemSelection,
    pub regions: RegionSelector,
    pub pin: MapPin,
    pub map: MapView,
    pub pending_notices: u32,
}

impl FormState {
    /// Returns `false` if initialization already happened.
    pub fn mark_initialized(&mut self) -> bool {
        !std::mem::replace(&mut self.initialized, true)
    }

    pub fn push_notice(&mut self, notice: Notice) {
        LogContext::notice(notice.level.as_str(), &notice.message);
        self.notices.push(notice);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            phase: self.phase,
            can_submit: self.phase.can_submit(),
            contact: self.contact.clone(),
            items: self.items.clone(),
            regions: self.regions.clone(),
            pin: self.pin.clone(),
            map: self.pin.view(),
            pending_notices: u32::try_from(self.notices.len()).unwrap_or(u32::MAX),
        }
    }

    /// Build the record to send. Checks only what the form's controls would
    /// enforce: a well-formed email and a chosen state and city.
    pub fn compose_record(&self) -> AppResult<SubmissionRecord> {
        Validator::validate_email(&self.contact.email)?;

        let region = self
            .regions
            .selected_region()
            .cloned()
            .ok_or_else(|| AppError::ValidationError("Select a state (UF)".to_string()))?;
        let municipality = self
            .regions
            .selected_municipality()
            .cloned()
            .ok_or_else(|| AppError::ValidationError("Select a city".to_string()))?;

        Ok(SubmissionRecord {
            contact: self.contact.clone(),
            region,
            municipality,
            coordinate: self.pin.selected(),
            items: self.items.selected().clone(),
        })
    }
}
