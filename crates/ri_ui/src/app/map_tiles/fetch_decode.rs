use std::time::Duration;

use eframe::egui::ColorImage;
use image::ImageFormat;

use super::types::{TileFetchError, TileKey, TileResult};

pub(crate) fn build_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::blocking::Client, TileFetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

pub(crate) fn fetch_tile(
    client: &reqwest::blocking::Client,
    url: &str,
    key: TileKey,
) -> TileResult {
    TileResult {
        key,
        image: fetch_tile_image(client, url),
    }
}

fn fetch_tile_image(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<ColorImage, TileFetchError> {
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(TileFetchError::Status(response.status().as_u16()));
    }
    let bytes = response.bytes()?;
    decode_tile_image(&bytes)
}

pub(crate) fn decode_tile_image(bytes: &[u8]) -> Result<ColorImage, TileFetchError> {
    let rgba = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
