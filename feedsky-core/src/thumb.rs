use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use reqwest::Client;

use crate::error::ThumbError;

/// Card thumbnails are scaled to this width before upload; Bluesky rejects
/// oversized images.
pub const CARD_WIDTH: u32 = 300;

pub fn scaled_height(width: u32, height: u32) -> u32 {
    (f64::from(height) * f64::from(CARD_WIDTH) / f64::from(width)).round() as u32
}

pub fn resize_to_card(img: &DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    img.resize_exact(CARD_WIDTH, scaled_height(width, height), FilterType::Lanczos3)
}

pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Downloads the entry's image, scales it to card width, and re-encodes it
/// as PNG bytes ready for blob upload.
pub async fn fetch_thumb(client: &Client, image_url: &str) -> Result<Vec<u8>, ThumbError> {
    let response = client.get(image_url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    let img = image::load_from_memory(&bytes)?;
    let png = encode_png(&resize_to_card(&img))?;
    Ok(png)
}
