use serde::{Deserialize, Serialize};

use super::geo::LatLng;

pub const DEFAULT_CONTAINER_ID: &str = "neighborhood-map";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Highest zoom level served by the OpenStreetMap tile servers.
pub const MAX_ZOOM: u8 = 19;

/// How the map surface asks Leaflet to draw itself.
///
/// The page never passes these to the surface directly; they travel through
/// context so the surface keeps a prop-less signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapSettings {
    /// DOM id of the container Leaflet attaches to
    pub container_id: String,

    pub zoom: u8,

    /// Leaflet collapses to zero height without an explicit size
    pub height_px: u32,

    /// Tile template with `{z}`, `{x}` and `{y}` placeholders
    pub tile_url: String,

    pub attribution: String,

    /// Whether the London neighborhood markers are added
    pub show_neighborhoods: bool,

    // Last so TOML writes it as a trailing [map.center] table
    pub center: LatLng,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self::london()
    }
}

impl MapSettings {
    /// Central London at a zoom that fits the inner boroughs.
    pub fn london() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            zoom: 11,
            height_px: 600,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            show_neighborhoods: true,
            center: LatLng::new(51.5074, -0.1278),
        }
    }

    pub fn container_style(&self) -> String {
        format!("height: {}px; width: 100%;", self.height_px)
    }

    pub fn has_tile_placeholders(&self) -> bool {
        ["{z}", "{x}", "{y}"]
            .iter()
            .all(|placeholder| self.tile_url.contains(placeholder))
    }

    pub fn has_valid_container_id(&self) -> bool {
        !self.container_id.is_empty() && !self.container_id.chars().any(char::is_whitespace)
    }
}
