use std::fmt;
use std::time::Instant;

use eframe::egui::ColorImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileKey {
    pub(crate) fn texture_name(&self) -> String {
        format!("tile-{}-{}-{}", self.z, self.x, self.y)
    }
}

/// Errors encountered while loading a raster tile.
#[derive(Debug)]
pub enum TileFetchError {
    Http(reqwest::Error),
    Status(u16),
    Decode(image::ImageError),
}

impl fmt::Display for TileFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileFetchError::Http(err) => write!(f, "request failed: {err}"),
            TileFetchError::Status(status) => write!(f, "status {status}"),
            TileFetchError::Decode(err) => write!(f, "decode failed: {err}"),
        }
    }
}

impl From<reqwest::Error> for TileFetchError {
    fn from(err: reqwest::Error) -> Self {
        TileFetchError::Http(err)
    }
}

impl From<image::ImageError> for TileFetchError {
    fn from(err: image::ImageError) -> Self {
        TileFetchError::Decode(err)
    }
}

pub(crate) struct TileResult {
    pub key: TileKey,
    pub image: Result<ColorImage, TileFetchError>,
}

/// Last failure for a tile; the tile becomes eligible again once the backoff has passed.
#[derive(Debug, Clone)]
pub(crate) struct TileFailure {
    pub message: String,
    pub failed_at: Instant,
}
