//! Constants used throughout the UI.

use eframe::egui::Color32;

pub const APP_TITLE: &str = "How Many Rhode Islands?";

pub const APP_INSTRUCTIONS: &str =
    "Click two points on the map to measure the distance in Rhode Islands!";

/// Fill for tiles that have not arrived yet.
pub const TILE_PLACEHOLDER: Color32 = Color32::from_gray(221);

/// Fill for tiles whose download failed.
pub const TILE_FAILED: Color32 = Color32::from_gray(200);

pub const MAP_BORDER: Color32 = Color32::from_gray(160);

pub const ATTRIBUTION_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(200, 200, 200, 200);

pub const ZOOM_BUTTON_SIZE: f32 = 26.0;
