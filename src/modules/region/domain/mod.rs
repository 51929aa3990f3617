pub mod region_directory;
pub mod value_objects;

pub use region_directory::RegionDirectoryClient;
#[cfg(test)]
pub use region_directory::MockRegionDirectoryClient;
pub use value_objects::{MunicipalityName, RegionCode};
