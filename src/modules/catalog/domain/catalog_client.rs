use super::item_category::ItemCategory;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Source of the collectible item categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemCatalogClient: Send + Sync {
    async fn list_items(&self) -> AppResult<Vec<ItemCategory>>;
}
