//! ICO and PNG containerization
//!
//! The ICO container holds every rendered resolution; standard OS icon
//! loaders pick the closest size. Encoding happens fully in memory so the
//! caller can commit the bytes atomically.

use std::io::Cursor;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

/// Encode rendered frames into a single ICO container
pub fn encode_ico(frames: &[RgbaImage]) -> std::io::Result<Vec<u8>> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let (width, height) = frame.dimensions();
        let icon = IconImage::from_rgba_data(width, height, frame.as_raw().clone());
        dir.add_entry(IconDirEntry::encode(&icon)?);
    }

    let mut out = Vec::new();
    dir.write(&mut out)?;
    Ok(out)
}

/// Encode a single frame as PNG
pub fn encode_png(frame: &RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    frame.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}
