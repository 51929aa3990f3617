pub mod catalog_client;
pub mod item_category;

pub use catalog_client::ItemCatalogClient;
#[cfg(test)]
pub use catalog_client::MockItemCatalogClient;
pub use item_category::ItemCategory;
