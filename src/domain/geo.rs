use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in the order Leaflet expects it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// `[lat, lng]`, the array form accepted by `L.map().setView` and `L.marker`.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}
