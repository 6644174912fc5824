//! Rectangle and line primitives over RGBA buffers
//!
//! Bounds are inclusive and clipped to the image; geometry derived from
//! small integer divisions can land a coordinate or two outside the canvas
//! at the smallest icon sizes.

use image::{Rgba, RgbaImage};

pub type Color = Rgba<u8>;

/// Fill the inclusive rectangle [left, right] x [top, bottom]
pub fn fill_rect(img: &mut RgbaImage, left: i32, top: i32, right: i32, bottom: i32, color: Color) {
    let (w, h) = img.dimensions();
    if right < left || bottom < top || right < 0 || bottom < 0 {
        return;
    }
    if left >= w as i32 || top >= h as i32 {
        return;
    }
    let x0 = left.max(0) as u32;
    let y0 = top.max(0) as u32;
    let x1 = right.min(w as i32 - 1) as u32;
    let y1 = bottom.min(h as i32 - 1) as u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Stroke the inclusive rectangle border, `stroke` pixels thick, inward
pub fn outline_rect(
    img: &mut RgbaImage,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    stroke: i32,
    color: Color,
) {
    let inset = stroke - 1;
    fill_rect(img, left, top, right, top + inset, color);
    fill_rect(img, left, bottom - inset, right, bottom, color);
    fill_rect(img, left, top, left + inset, bottom, color);
    fill_rect(img, right - inset, top, right, bottom, color);
}

/// Horizontal line from `left` to `right` at row `y`, `width` pixels tall
pub fn hline(img: &mut RgbaImage, left: i32, right: i32, y: i32, width: i32, color: Color) {
    fill_rect(img, left, y, right, y + width - 1, color);
}
