use super::coordinate::{Coordinate, DEFAULT_MAP_CENTER};
use crate::shared::errors::AppResult;
use serde::Serialize;

pub const DEFAULT_ZOOM: u8 = 15;
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// Settings the host needs to build the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

/// Draggable pin state.
///
/// `initial` is the device position (or [`DEFAULT_MAP_CENTER`]); `selected`
/// is where the user dropped the pin. Dragging never touches `initial`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct MapPin {
    initial: Coordinate,
    selected: Coordinate,
    dragged: bool,
}

impl Default for MapPin {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MapPin {
    pub fn new(initial: Option<Coordinate>) -> Self {
        let initial = initial.unwrap_or(DEFAULT_MAP_CENTER);
        Self {
            initial,
            selected: initial,
            dragged: false,
        }
    }

    pub fn initial(&self) -> Coordinate {
        self.initial
    }

    pub fn selected(&self) -> Coordinate {
        self.selected
    }

    pub fn was_dragged(&self) -> bool {
        self.dragged
    }

    /// Recenter on the device position. The pin follows unless the user
    /// already moved it.
    pub fn recenter(&mut self, device_position: Coordinate) {
        self.initial = device_position;
        if !self.dragged {
            self.selected = device_position;
        }
    }

    /// Drag-end event from the map widget.
    pub fn drag_end(&mut self, position: Coordinate) -> AppResult<()> {
        position.validate()?;
        self.selected = position;
        self.dragged = true;
        Ok(())
    }

    pub fn view(&self) -> MapView {
        MapView {
            center: self.initial,
            zoom: DEFAULT_ZOOM,
            tile_url: TILE_URL_TEMPLATE.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
        }
    }
}
