use crate::modules::catalog::ItemCategory;
use crate::shared::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::BTreeSet;

/// Item catalog plus the ids the user picked. Clicking an item toggles it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct ItemSelection {
    catalog: Vec<ItemCategory>,
    selected: BTreeSet<i32>,
}

impl ItemSelection {
    pub fn set_catalog(&mut self, catalog: Vec<ItemCategory>) {
        self.selected
            .retain(|id| catalog.iter().any(|item| item.id == *id));
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &[ItemCategory] {
        &self.catalog
    }

    pub fn selected(&self) -> &BTreeSet<i32> {
        &self.selected
    }

    pub fn is_selected(&self, id: i32) -> bool {
        self.selected.contains(&id)
    }

    /// Returns whether the item is selected after the toggle.
    pub fn toggle(&mut self, id: i32) -> AppResult<bool> {
        if !self.catalog.iter().any(|item| item.id == id) {
            return Err(AppError::ValidationError(format!(
                "Unknown item category {}",
                id
            )));
        }

        if self.selected.remove(&id) {
            Ok(false)
        } else {
            self.selected.insert(id);
            Ok(true)
        }
    }
}
