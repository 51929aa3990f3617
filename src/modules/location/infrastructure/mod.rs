pub mod fixed_geolocation;
pub mod reported_geolocation;

pub use fixed_geolocation::FixedGeolocation;
pub use reported_geolocation::{PositionReport, ReportedGeolocation};
