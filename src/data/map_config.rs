use serde::{Deserialize, Serialize};

use super::position::Position;

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Public knobs of the search form and map. Served to the browser by the
/// `GetMapConfig` server function, so nothing secret beyond the tile key
/// (which the tile URL exposes anyway) belongs here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub geocoder_url: String,
    pub result_limit: usize,
    pub debounce_ms: u64,
    pub user_agent: String,
    pub tile_url: String,
    pub tile_attribution: String,
    pub default_position: Position,
    pub default_zoom: f64,
    pub popup_text: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            geocoder_url: NOMINATIM_SEARCH_URL.to_string(),
            result_limit: 5,
            debounce_ms: 300,
            user_agent: "LoveMaps/0.1".to_string(),
            tile_url: OSM_TILE_URL.to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
            default_position: Position::default(),
            default_zoom: 13.0,
            popup_text: "By LoveMaps 💕.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MapConfig =
            serde_json::from_str(r#"{"debounce_ms": 150, "default_zoom": 10.0}"#).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.default_zoom, 10.0);
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.geocoder_url, NOMINATIM_SEARCH_URL);
    }
}
