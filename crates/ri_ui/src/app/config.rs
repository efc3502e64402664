//! Map widget configuration.
//!
//! There is no config file: the application runs with `MapConfig::default()`.

use std::time::Duration;

use ri_core::geo::Location;

#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Initial viewport center (the middle of Rhode Island).
    pub center: Location,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Raster tile source with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url_template: String,
    pub subdomains: Vec<String>,
    /// Edge length of one tile in logical pixels.
    pub tile_size: f32,
    pub attribution_text: String,
    pub attribution_url: String,
    /// Height of the map area in logical pixels; width fills the window.
    pub map_height: f32,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// Decoded tile textures kept in memory.
    pub tile_cache_capacity: usize,
    /// How long a failed tile stays grey before it is requested again.
    pub tile_retry_after: Duration,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Location::new(41.5801, -71.4774),
            zoom: 8,
            min_zoom: 0,
            max_zoom: 19,
            tile_url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            tile_size: 256.0,
            attribution_text: "© OpenStreetMap contributors".to_string(),
            attribution_url: "https://www.openstreetmap.org/copyright".to_string(),
            map_height: 500.0,
            user_agent: concat!("ri_ui/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: Duration::from_secs(5),
            tile_cache_capacity: 256,
            tile_retry_after: Duration::from_secs(10),
        }
    }
}

impl MapConfig {
    pub fn clamp_zoom(&self, zoom: i32) -> u8 {
        zoom.clamp(self.min_zoom as i32, self.max_zoom as i32) as u8
    }
}
