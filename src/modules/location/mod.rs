pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{Coordinate, GeolocationProvider, MapPin, MapView, DEFAULT_MAP_CENTER};
pub use infrastructure::{FixedGeolocation, PositionReport, ReportedGeolocation};
