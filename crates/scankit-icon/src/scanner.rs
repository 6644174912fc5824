//! Flatbed-scanner pictogram
//!
//! A body outline with a darker lid band, a document with scan lines, and a
//! cyan scan beam. All geometry scales with the icon size; the minimums keep
//! the shapes visible down to 16x16.

use image::{Rgba, RgbaImage};

use crate::draw::{Color, fill_rect, hline, outline_rect};

/// Resolutions composited into the ICO container
pub const ICON_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// Resolution of the standalone PNG preview
pub const PREVIEW_SIZE: u32 = 256;

const BODY_OUTLINE: Color = Rgba([70, 70, 70, 255]);
const BODY_FILL: Color = Rgba([200, 200, 200, 255]);
const LID: Color = Rgba([120, 120, 120, 255]);
const DOC_FILL: Color = Rgba([255, 255, 255, 255]);
const DOC_OUTLINE: Color = Rgba([100, 100, 100, 255]);
const SCAN_LINE: Color = Rgba([180, 180, 180, 255]);
const BEAM: Color = Rgba([0, 200, 255, 200]);

/// Rasterize the scanner pictogram at `size` x `size` over a transparent
/// background
pub fn scanner_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let s = size as i32;

    let padding = (s / 8).max(2);
    let body_top = padding;
    let body_bottom = s - padding;
    let body_left = padding;
    let body_right = s - padding;

    let stroke = (s / 16).max(1);
    outline_rect(
        &mut img, body_left, body_top, body_right, body_bottom, stroke, BODY_OUTLINE,
    );

    let fill_pad = (s / 16).max(1);
    fill_rect(
        &mut img,
        body_left + fill_pad,
        body_top + fill_pad,
        body_right - fill_pad,
        body_bottom - fill_pad,
        BODY_FILL,
    );

    let lid_height = (s / 4).max(3);
    fill_rect(
        &mut img,
        body_left + fill_pad,
        body_top + fill_pad,
        body_right - fill_pad,
        body_top + lid_height,
        LID,
    );

    let doc_pad = (s / 5).max(2);
    let doc_top = body_top + lid_height + (s / 16).max(2);
    let doc_bottom = body_bottom - (s / 8).max(2);
    let doc_left = body_left + doc_pad;
    let doc_right = body_right - doc_pad;

    fill_rect(&mut img, doc_left, doc_top, doc_right, doc_bottom, DOC_FILL);
    outline_rect(&mut img, doc_left, doc_top, doc_right, doc_bottom, 1, DOC_OUTLINE);

    let num_lines = (s / 8).max(2);
    let spacing = (doc_bottom - doc_top) as f32 / (num_lines + 1) as f32;
    let line_inset = (s / 16).max(1);
    for i in 1..=num_lines {
        let y = doc_top + (i as f32 * spacing) as i32;
        hline(
            &mut img,
            doc_left + line_inset,
            doc_right - line_inset,
            y,
            1,
            SCAN_LINE,
        );
    }

    let beam_y = doc_top + ((doc_bottom - doc_top) as f32 * 0.4) as i32;
    hline(&mut img, doc_left, doc_right, beam_y, (s / 12).max(1), BEAM);

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sizes_render() {
        for &size in ICON_SIZES {
            let img = scanner_icon(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_background_stays_transparent() {
        for &size in ICON_SIZES {
            let img = scanner_icon(size);
            // Padding is at least 2, so the corners are never drawn on
            assert_eq!(img.get_pixel(0, 0)[3], 0, "size {}", size);
            assert_eq!(img.get_pixel(size - 1, size - 1)[3], 0, "size {}", size);
        }
    }

    #[test]
    fn test_body_outline_present() {
        let img = scanner_icon(64);
        let padding = 8;
        assert_eq!(*img.get_pixel(padding, padding), BODY_OUTLINE);
        assert_eq!(*img.get_pixel(63 - padding, 63 - padding), BODY_OUTLINE);
    }

    #[test]
    fn test_scan_beam_present() {
        for &size in ICON_SIZES {
            let img = scanner_icon(size);
            let has_beam = img.pixels().any(|p| *p == BEAM);
            assert!(has_beam, "no scan beam at size {}", size);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(scanner_icon(48).as_raw(), scanner_icon(48).as_raw());
    }
}
