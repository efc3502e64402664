//! Raster tile loading for the map surface.
//!
//! Tiles are fetched on short-lived worker threads and handed back over a
//! channel; the UI thread drains the channel once per frame and uploads the
//! decoded images as textures.

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui::{self, TextureHandle, TextureOptions};
use lru::LruCache;
use tracing::{trace, warn};

use crate::app::config::MapConfig;

mod bookkeeping;
mod fetch_decode;
mod types;


use types::{TileFailure, TileResult};
pub use types::TileKey;

pub struct MapTileState {
    textures: LruCache<TileKey, TextureHandle>,
    inflight: HashSet<TileKey>,
    errors: HashMap<TileKey, TileFailure>,
    retry_after: Duration,
    sender: Sender<TileResult>,
    receiver: Receiver<TileResult>,
    client: Option<reqwest::blocking::Client>,
    url_template: String,
    subdomains: Vec<String>,
}

impl MapTileState {
    pub fn new(config: &MapConfig) -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        let client = match fetch_decode::build_client(&config.user_agent, config.request_timeout)
        {
            Ok(client) => Some(client),
            Err(error) => {
                warn!(%error, "tile client unavailable, map will render without tiles");
                None
            }
        };
        let capacity = NonZeroUsize::new(config.tile_cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            textures: LruCache::new(capacity),
            inflight: HashSet::new(),
            errors: HashMap::new(),
            retry_after: config.tile_retry_after,
            sender,
            receiver,
            client,
            url_template: config.tile_url_template.clone(),
            subdomains: config.subdomains.clone(),
        }
    }

    pub fn drain_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.receiver.try_recv() {
            if let Some((key, image)) = bookkeeping::apply_tile_result(
                &mut self.inflight,
                &mut self.errors,
                result,
                Instant::now(),
            ) {
                let texture = ctx.load_texture(key.texture_name(), image, TextureOptions::LINEAR);
                self.textures.put(key, texture);
            }
        }
    }

    pub fn request_missing_tiles<I>(&mut self, ctx: &egui::Context, keys: I)
    where
        I: IntoIterator<Item = TileKey>,
    {
        let Some(client) = self.client.clone() else {
            return;
        };
        for key in self.next_requests(keys, Instant::now()) {
            let sender = self.sender.clone();
            let client = client.clone();
            let ctx = ctx.clone();
            let url = bookkeeping::tile_url(&self.url_template, &self.subdomains, key);
            trace!(%url, "requesting tile");
            std::thread::spawn(move || {
                let result = fetch_decode::fetch_tile(&client, &url, key);
                let _ = sender.send(result);
                ctx.request_repaint();
            });
        }
    }

    /// Picks the keys to fetch now and marks them in flight.
    ///
    /// Cached and in-flight keys are skipped, failed keys wait out the retry
    /// backoff, and the batch stops at the in-flight limit.
    fn next_requests<I>(&mut self, keys: I, now: Instant) -> Vec<TileKey>
    where
        I: IntoIterator<Item = TileKey>,
    {
        let limit = bookkeeping::current_inflight_limit(self.textures.len());
        let mut picked = Vec::new();
        for key in keys {
            if self.inflight.len() >= limit {
                break;
            }
            if self.textures.contains(&key) || self.inflight.contains(&key) {
                continue;
            }
            if let Some(failure) = self.errors.get(&key) {
                if !bookkeeping::retry_due(failure, now, self.retry_after) {
                    continue;
                }
                trace!(
                    z = key.z,
                    x = key.x,
                    y = key.y,
                    last_error = %failure.message,
                    "retrying tile"
                );
                self.errors.remove(&key);
            }
            self.inflight.insert(key);
            picked.push(key);
        }
        picked
    }

    pub fn texture(&mut self, key: &TileKey) -> Option<&TextureHandle> {
        self.textures.get(key)
    }

    pub fn failed(&self, key: &TileKey) -> bool {
        self.errors.contains_key(key)
    }
}
