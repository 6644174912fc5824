//! # scankit-core
//!
//! Byte-exact encoder for the synthetic ICC profiles the scankit generators
//! ship. The only profile shape ever constructed is a display-class RGB
//! matrix/TRC profile whose tone curves apply a constant per-channel offset;
//! consumers are third-party color-management pipelines, so the container
//! layout (128-byte header, tag table, padded tag payloads, big-endian
//! fixed-width fields) must match the format exactly.
//!
//! ## Quick Start
//!
//! ```
//! use scankit_core::{ChannelOffsets, ShiftProfile};
//!
//! let profile = ShiftProfile::new(
//!     ChannelOffsets::red_only(22),
//!     "Red+22 Test Profile",
//!     "Public Domain",
//! );
//! let bytes = profile.encode().unwrap();
//!
//! // The leading size field always matches the assembled length
//! let size = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
//! assert_eq!(size as usize, bytes.len());
//! ```

pub mod error;
pub mod icc;
pub mod profile;

pub use error::{EncodeError, Result};
pub use profile::{ChannelOffsets, ShiftProfile};

/// Version of scankit-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
