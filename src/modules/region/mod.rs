pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{MunicipalityName, RegionCode, RegionDirectoryClient};
pub use infrastructure::IbgeRegionDirectoryClient;
