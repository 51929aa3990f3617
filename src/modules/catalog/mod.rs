pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{ItemCatalogClient, ItemCategory};
pub use infrastructure::HttpItemCatalogClient;
