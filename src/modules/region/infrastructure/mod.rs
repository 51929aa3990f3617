pub mod ibge;

pub use ibge::IbgeRegionDirectoryClient;
