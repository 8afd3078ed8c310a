pub mod geo;
pub mod map_settings;
pub mod neighborhood;

pub use geo::LatLng;
pub use map_settings::MapSettings;
pub use neighborhood::{Neighborhood, london_neighborhoods};
