//! Web-Mercator viewport: maps screen positions to locations and back.
//!
//! World coordinates are pixels at the current zoom, with (0, 0) at the
//! north-west corner of tile (0, 0). The viewport center is stored as a
//! location so that zooming keeps it stable.

use eframe::egui::{self, Pos2, Rect, Vec2};
use ri_core::geo::Location;

use crate::app::config::MapConfig;
use crate::app::map_tiles::TileKey;

const MAX_MERCATOR_LAT: f64 = 85.05112878;
/// Scroll distance, in points, that makes one zoom level.
const SCROLL_POINTS_PER_LEVEL: f32 = 50.0;

/// A tile that intersects the map rect, with the screen rect it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    pub key: TileKey,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    center: Location,
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
    tile_size: f64,
    /// Scroll points not yet turned into a zoom level.
    pending_scroll: f32,
    /// Pinch zoom in levels (log2 of the scale) not yet applied.
    pending_pinch: f32,
}

impl MapViewport {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.clamp_zoom(config.zoom as i32),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            tile_size: config.tile_size as f64,
            pending_scroll: 0.0,
            pending_pinch: 0.0,
        }
    }

    pub fn center(&self) -> Location {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    fn world_size(&self, zoom: u8) -> f64 {
        self.tile_size * (1u64 << zoom) as f64
    }

    fn project(&self, location: Location, zoom: u8) -> (f64, f64) {
        let size = self.world_size(zoom);
        let x = (location.lng + 180.0) / 360.0 * size;
        let lat = location
            .lat
            .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
            .to_radians();
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) * 0.5 * size;
        (x, y)
    }

    fn unproject(&self, x: f64, y: f64, zoom: u8) -> Location {
        let size = self.world_size(zoom);
        let lng = x / size * 360.0 - 180.0;
        let lat = (std::f64::consts::PI * (1.0 - 2.0 * y / size))
            .sinh()
            .atan()
            .to_degrees();
        Location::new(lat, lng)
    }

    pub fn location_to_screen(&self, location: Location, rect: Rect) -> Pos2 {
        let (cx, cy) = self.project(self.center, self.zoom);
        let (x, y) = self.project(location, self.zoom);
        let screen_center = rect.center();
        egui::pos2(
            screen_center.x + (x - cx) as f32,
            screen_center.y + (y - cy) as f32,
        )
    }

    /// Longitude is not wrapped: a point west of the antimeridian can read below -180.
    pub fn screen_to_location(&self, pos: Pos2, rect: Rect) -> Location {
        let (cx, cy) = self.project(self.center, self.zoom);
        let offset = pos - rect.center();
        self.unproject(cx + offset.x as f64, cy + offset.y as f64, self.zoom)
    }

    /// Move the map with the pointer: a positive delta drags content right/down.
    pub fn pan_by(&mut self, delta: Vec2) {
        let (cx, cy) = self.project(self.center, self.zoom);
        let size = self.world_size(self.zoom);
        let y = (cy - delta.y as f64).clamp(0.0, size);
        self.center = self.unproject(cx - delta.x as f64, y, self.zoom);
    }

    /// Change zoom by `steps` levels keeping the location under `anchor` in place.
    ///
    /// Returns `false` when the zoom limits leave the level unchanged.
    pub fn zoom_at(&mut self, anchor: Pos2, rect: Rect, steps: i32) -> bool {
        let zoom =
            (self.zoom as i32 + steps).clamp(self.min_zoom as i32, self.max_zoom as i32) as u8;
        if zoom == self.zoom {
            return false;
        }
        let anchored = self.screen_to_location(anchor, rect);
        let (ax, ay) = self.project(anchored, zoom);
        let offset = anchor - rect.center();
        self.center = self.unproject(ax - offset.x as f64, ay - offset.y as f64, zoom);
        self.zoom = zoom;
        true
    }

    /// Feed one frame of vertical scroll; zooms a level per `SCROLL_POINTS_PER_LEVEL`.
    ///
    /// Trackpads deliver a swipe as many small deltas, so the remainder is kept
    /// for the next frame. Returns `true` if the zoom level changed.
    pub fn scroll_zoom(&mut self, anchor: Pos2, rect: Rect, delta_y: f32) -> bool {
        self.pending_scroll += delta_y;
        let steps = (self.pending_scroll / SCROLL_POINTS_PER_LEVEL).trunc();
        if steps == 0.0 {
            return false;
        }
        self.pending_scroll -= steps * SCROLL_POINTS_PER_LEVEL;
        let zoomed = self.zoom_at(anchor, rect, steps as i32);
        if !zoomed {
            self.pending_scroll = 0.0;
        }
        zoomed
    }

    /// Feed one frame of pinch scale (1.0 means no change); a doubling is one level.
    pub fn pinch_zoom(&mut self, anchor: Pos2, rect: Rect, scale: f32) -> bool {
        if scale <= 0.0 || !scale.is_finite() {
            return false;
        }
        self.pending_pinch += scale.log2();
        let steps = self.pending_pinch.trunc();
        if steps == 0.0 {
            return false;
        }
        self.pending_pinch -= steps;
        let zoomed = self.zoom_at(anchor, rect, steps as i32);
        if !zoomed {
            self.pending_pinch = 0.0;
        }
        zoomed
    }

    /// Tiles covering `rect`; columns wrap around the globe, rows beyond the poles are skipped.
    pub fn visible_tiles(&self, rect: Rect) -> Vec<VisibleTile> {
        let (cx, cy) = self.project(self.center, self.zoom);
        let left = cx - rect.width() as f64 * 0.5;
        let top = cy - rect.height() as f64 * 0.5;
        let right = left + rect.width() as f64;
        let bottom = top + rect.height() as f64;

        let tile_count = 1i64 << self.zoom;
        let col_start = (left / self.tile_size).floor() as i64;
        let col_end = (right / self.tile_size).floor() as i64;
        let row_start = ((top / self.tile_size).floor() as i64).max(0);
        let row_end = ((bottom / self.tile_size).floor() as i64).min(tile_count - 1);

        let mut tiles = Vec::new();
        for row in row_start..=row_end {
            for col in col_start..=col_end {
                let min = egui::pos2(
                    rect.left() + (col as f64 * self.tile_size - left) as f32,
                    rect.top() + (row as f64 * self.tile_size - top) as f32,
                );
                let size = egui::vec2(self.tile_size as f32, self.tile_size as f32);
                tiles.push(VisibleTile {
                    key: TileKey {
                        z: self.zoom,
                        x: col.rem_euclid(tile_count) as u32,
                        y: row as u32,
                    },
                    rect: Rect::from_min_size(min, size),
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_rect() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 100.0), egui::vec2(800.0, 500.0))
    }

    fn assert_location_close(actual: Location, expected: Location) {
        assert!(
            (actual.lat - expected.lat).abs() < 1e-3 && (actual.lng - expected.lng).abs() < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn center_projects_to_rect_center() {
        let viewport = MapViewport::new(&MapConfig::default());
        let pos = viewport.location_to_screen(viewport.center(), map_rect());
        assert!((pos - map_rect().center()).length() < 1e-3);
        assert_location_close(
            viewport.screen_to_location(map_rect().center(), map_rect()),
            viewport.center(),
        );
    }

    #[test]
    fn screen_and_location_round_trip() {
        let viewport = MapViewport::new(&MapConfig::default());
        let providence = Location::new(41.8240, -71.4128);
        let pos = viewport.location_to_screen(providence, map_rect());
        assert!(map_rect().contains(pos));
        assert_location_close(viewport.screen_to_location(pos, map_rect()), providence);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let viewport = MapViewport::new(&MapConfig::default());
        let center = viewport.center();
        let north =
            viewport.location_to_screen(Location::new(center.lat + 0.1, center.lng), map_rect());
        let east =
            viewport.location_to_screen(Location::new(center.lat, center.lng + 0.1), map_rect());
        assert!(north.y < map_rect().center().y);
        assert!(east.x > map_rect().center().x);
    }

    #[test]
    fn panning_moves_content_with_the_pointer() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        let providence = Location::new(41.8240, -71.4128);
        let before = viewport.location_to_screen(providence, map_rect());
        viewport.pan_by(egui::vec2(40.0, -25.0));
        let after = viewport.location_to_screen(providence, map_rect());
        assert!((after - before - egui::vec2(40.0, -25.0)).length() < 1e-2);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        let anchor = egui::pos2(600.0, 200.0);
        let anchored = viewport.screen_to_location(anchor, map_rect());
        viewport.zoom_at(anchor, map_rect(), 1);
        assert_eq!(viewport.zoom(), 9);
        let pos = viewport.location_to_screen(anchored, map_rect());
        assert!((pos - anchor).length() < 1e-2);
    }

    #[test]
    fn zoom_stops_at_configured_limits() {
        let config = MapConfig {
            zoom: 18,
            ..MapConfig::default()
        };
        let mut viewport = MapViewport::new(&config);
        assert!(viewport.zoom_at(map_rect().center(), map_rect(), 5));
        assert_eq!(viewport.zoom(), 19);
        assert!(!viewport.zoom_at(map_rect().center(), map_rect(), 1));
        viewport.zoom_at(map_rect().center(), map_rect(), -40);
        assert_eq!(viewport.zoom(), 0);
    }

    #[test]
    fn small_scroll_deltas_add_up_to_one_level() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        let anchor = map_rect().center();
        let mut changes = 0;
        for _ in 0..12 {
            if viewport.scroll_zoom(anchor, map_rect(), 5.0) {
                changes += 1;
            }
        }
        assert_eq!(changes, 1);
        assert_eq!(viewport.zoom(), 9);
    }

    #[test]
    fn scroll_below_threshold_does_not_zoom() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        assert!(!viewport.scroll_zoom(map_rect().center(), map_rect(), 49.0));
        assert_eq!(viewport.zoom(), 8);
        assert!(!viewport.scroll_zoom(map_rect().center(), map_rect(), -49.0));
        assert_eq!(viewport.zoom(), 8);
    }

    #[test]
    fn scroll_remainder_carries_to_the_next_frame() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        let anchor = map_rect().center();
        assert!(viewport.scroll_zoom(anchor, map_rect(), 80.0));
        assert_eq!(viewport.zoom(), 9);
        assert!(viewport.scroll_zoom(anchor, map_rect(), 20.0));
        assert_eq!(viewport.zoom(), 10);
        assert!(viewport.scroll_zoom(anchor, map_rect(), -100.0));
        assert_eq!(viewport.zoom(), 8);
    }

    #[test]
    fn one_wheel_flick_zooms_by_its_size() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        assert!(viewport.scroll_zoom(map_rect().center(), map_rect(), -150.0));
        assert_eq!(viewport.zoom(), 5);
    }

    #[test]
    fn scroll_at_zoom_limit_does_not_bank_distance() {
        let config = MapConfig {
            zoom: 19,
            ..MapConfig::default()
        };
        let mut viewport = MapViewport::new(&config);
        let anchor = map_rect().center();
        for _ in 0..10 {
            viewport.scroll_zoom(anchor, map_rect(), 50.0);
        }
        assert_eq!(viewport.zoom(), 19);
        assert!(viewport.scroll_zoom(anchor, map_rect(), -50.0));
        assert_eq!(viewport.zoom(), 18);
    }

    #[test]
    fn pinch_zooms_a_level_per_doubling() {
        let mut viewport = MapViewport::new(&MapConfig::default());
        let anchor = egui::pos2(300.0, 250.0);
        let anchored = viewport.screen_to_location(anchor, map_rect());

        assert!(!viewport.pinch_zoom(anchor, map_rect(), 1.0));
        assert!(!viewport.pinch_zoom(anchor, map_rect(), 1.5));
        assert_eq!(viewport.zoom(), 8);
        assert!(viewport.pinch_zoom(anchor, map_rect(), 1.5));
        assert_eq!(viewport.zoom(), 9);
        let pos = viewport.location_to_screen(anchored, map_rect());
        assert!((pos - anchor).length() < 1e-2);

        assert!(viewport.pinch_zoom(anchor, map_rect(), 0.125));
        assert_eq!(viewport.zoom(), 7);
    }

    #[test]
    fn visible_tiles_cover_the_rect() {
        let viewport = MapViewport::new(&MapConfig::default());
        let rect = map_rect();
        let tiles = viewport.visible_tiles(rect);
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|tile| tile.key.z == 8));
        assert!(tiles.iter().all(|tile| tile.rect.intersects(rect)));
        let covered: f32 = tiles
            .iter()
            .map(|tile| tile.rect.intersect(rect).area())
            .sum();
        assert!((covered - rect.area()).abs() < 1.0);
        // Rhode Island sits in tile (77, 95) at zoom 8.
        assert!(tiles.iter().any(|tile| tile.key.x == 77 && tile.key.y == 95));
    }

    #[test]
    fn world_view_wraps_columns_and_skips_polar_rows() {
        let config = MapConfig {
            zoom: 0,
            ..MapConfig::default()
        };
        let viewport = MapViewport::new(&config);
        let tiles = viewport.visible_tiles(map_rect());
        assert!(tiles.iter().all(|tile| tile.key.x == 0 && tile.key.y == 0));
        assert!(tiles.len() >= 3);
    }
}
