//! # scankit-icon
//!
//! Rasterizes the scanner tray icon: a flatbed-scanner pictogram drawn at
//! several resolutions, composited into a Windows ICO container, with a
//! single-frame PNG preview. Pure in-memory encoding; callers own file I/O.
//!
//! ```
//! use scankit_icon::{ICON_SIZES, encode_ico, scanner_icon};
//!
//! let frames: Vec<_> = ICON_SIZES.iter().map(|&s| scanner_icon(s)).collect();
//! let ico = encode_ico(&frames).unwrap();
//! assert_eq!(&ico[0..4], &[0, 0, 1, 0]);
//! ```

pub mod draw;

mod container;
mod scanner;

pub use container::{encode_ico, encode_png};
pub use scanner::{ICON_SIZES, PREVIEW_SIZE, scanner_icon};
