use super::application::{CollectionPointForm, SubmitOutcome};
use super::domain::{FormSnapshot, Notice};
use crate::modules::location::{Coordinate, PositionReport, ReportedGeolocation};
use crate::modules::region::{MunicipalityName, RegionCode};
use crate::modules::submission::ContactField;
use crate::shared::errors::AppResult;
use crate::log_debug;
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::Arc;
use tauri::State;

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SelectRegionRequest {
    /// `None`, `""` and the placeholder `"0"` all mean "no state".
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SelectMunicipalityRequest {
    pub municipality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct UpdateContactFieldRequest {
    pub field: ContactField,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ToggleItemRequest {
    pub item_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct UpdatePinRequest {
    pub position: Coordinate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ReportDevicePositionRequest {
    pub position: Option<Coordinate>,
    pub denied: bool,
    pub message: Option<String>,
}

/// Dropdown value to an optional choice.
fn placeholder_to_none(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != "0")
}

fn parse_region(raw: Option<String>) -> AppResult<Option<RegionCode>> {
    placeholder_to_none(raw)
        .map(|value| RegionCode::parse(&value))
        .transpose()
}

fn parse_municipality(raw: Option<String>) -> AppResult<Option<MunicipalityName>> {
    placeholder_to_none(raw)
        .map(|value| MunicipalityName::parse(&value))
        .transpose()
}

#[tauri::command]
#[specta::specta]
pub async fn initialize_form(
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    Ok(form.initialize().await)
}

#[tauri::command]
#[specta::specta]
pub async fn get_form_snapshot(
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    Ok(form.snapshot().await)
}

#[tauri::command]
#[specta::specta]
pub async fn select_region(
    request: SelectRegionRequest,
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    let region = parse_region(request.region).map_err(|e| e.to_string())?;
    form.select_region(region).await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn select_municipality(
    request: SelectMunicipalityRequest,
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    let municipality = parse_municipality(request.municipality).map_err(|e| e.to_string())?;
    form.select_municipality(municipality)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn update_contact_field(
    request: UpdateContactFieldRequest,
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    form.update_contact_field(request.field, request.value)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn toggle_item(
    request: ToggleItemRequest,
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    form.toggle_item(request.item_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn update_pin(
    request: UpdatePinRequest,
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<FormSnapshot, String> {
    form.update_pin(request.position)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn submit_point(
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<SubmitOutcome, String> {
    form.submit().await.map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn take_notices(
    form: State<'_, Arc<CollectionPointForm>>,
) -> Result<Vec<Notice>, String> {
    Ok(form.take_notices().await)
}

/// Result of `navigator.geolocation.getCurrentPosition` in the webview.
#[tauri::command]
#[specta::specta]
pub async fn report_device_position(
    request: ReportDevicePositionRequest,
    geolocation: State<'_, Arc<ReportedGeolocation>>,
) -> Result<(), String> {
    let report = match request.position {
        Some(position) => {
            position.validate().map_err(|e| e.to_string())?;
            PositionReport::Position(position)
        }
        None if request.denied => PositionReport::Denied(
            request
                .message
                .unwrap_or_else(|| "Geolocation permission denied".to_string()),
        ),
        None => PositionReport::Unavailable(
            request
                .message
                .unwrap_or_else(|| "Position unavailable".to_string()),
        ),
    };
    log_debug!("Webview reported device position");
    geolocation.report(report);
    Ok(())
}
