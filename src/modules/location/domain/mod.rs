pub mod coordinate;
pub mod geolocation;
pub mod map_pin;

pub use coordinate::{Coordinate, DEFAULT_MAP_CENTER};
pub use geolocation::GeolocationProvider;
#[cfg(test)]
pub use geolocation::MockGeolocationProvider;
pub use map_pin::{MapPin, MapView};
