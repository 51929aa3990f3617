use crate::shared::errors::AppError;
use crate::shared::utils::Validator;
use serde::{Deserialize, Serialize};

/// A class of recyclable material a collection point can accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

impl ItemCategory {
    pub fn new(id: i32, title: impl Into<String>, image_url: impl Into<String>) -> Result<Self, AppError> {
        Validator::validate_item_id(id)?;

        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Item {} has an empty title",
                id
            )));
        }

        Ok(Self {
            id,
            title,
            image_url: image_url.into(),
        })
    }
}
