use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use eframe::egui::ColorImage;
use tracing::warn;

use super::types::{TileFailure, TileKey, TileResult};

pub(crate) fn current_inflight_limit(tile_count: usize) -> usize {
    const WARMUP_TILES: usize = 6;
    const WARMUP_LIMIT: usize = 4;
    const MAX_LIMIT: usize = 12;
    if tile_count >= WARMUP_TILES {
        MAX_LIMIT
    } else {
        WARMUP_LIMIT
    }
}

/// Clears the in-flight marker and records failures; returns the image on success.
pub(crate) fn apply_tile_result(
    inflight: &mut HashSet<TileKey>,
    errors: &mut HashMap<TileKey, TileFailure>,
    result: TileResult,
    now: Instant,
) -> Option<(TileKey, ColorImage)> {
    inflight.remove(&result.key);
    match result.image {
        Ok(image) => {
            errors.remove(&result.key);
            Some((result.key, image))
        }
        Err(error) => {
            let message = error.to_string();
            warn!(
                z = result.key.z,
                x = result.key.x,
                y = result.key.y,
                error = %message,
                "tile load failed"
            );
            errors.insert(
                result.key,
                TileFailure {
                    message,
                    failed_at: now,
                },
            );
            None
        }
    }
}

pub(crate) fn retry_due(failure: &TileFailure, now: Instant, retry_after: Duration) -> bool {
    now.saturating_duration_since(failure.failed_at) >= retry_after
}

/// Expand `{s}`, `{z}`, `{x}` and `{y}` in a tile URL template.
pub(crate) fn tile_url(template: &str, subdomains: &[String], key: TileKey) -> String {
    let subdomain = if subdomains.is_empty() {
        ""
    } else {
        let index = (key.x as usize + key.y as usize) % subdomains.len();
        subdomains[index].as_str()
    };
    template
        .replace("{s}", subdomain)
        .replace("{z}", &key.z.to_string())
        .replace("{x}", &key.x.to_string())
        .replace("{y}", &key.y.to_string())
}
