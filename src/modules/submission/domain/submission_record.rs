use super::contact_info::ContactInfo;
use crate::modules::location::Coordinate;
use crate::modules::region::{MunicipalityName, RegionCode};
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything the form collected, composed at submit time and sent once.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub contact: ContactInfo,
    pub region: RegionCode,
    pub municipality: MunicipalityName,
    pub coordinate: Coordinate,
    pub items: BTreeSet<i32>,
}

/// What the backend acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Identifier assigned by the backend, when it returns one
    pub point_id: Option<i32>,
}
