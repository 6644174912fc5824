//! ICC Profile Encoding
//!
//! This module produces fixed-layout ICC profile containers:
//!
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Padded tag payloads
//!
//! Only the write direction is implemented; the profile shape is fixed by
//! the caller, never read back from disk.
//!
//! # Example
//!
//! ```
//! use scankit_core::icc::{ProfileHeader, ProfileWriter, TagData, TagSignature, ToneCurve};
//!
//! let mut writer = ProfileWriter::new(ProfileHeader::display_rgb());
//! writer.add_tag(TagSignature::RED_TRC, &TagData::Curve(ToneCurve::from_offset(22)));
//! let bytes = writer.finish();
//! assert_eq!(&bytes[36..40], b"acsp");
//! ```

pub mod header;
pub mod tags;

mod types;
mod writer;

pub use header::{
    ColorSpace, HEADER_SIZE, PROFILE_SIGNATURE, ProfileClass, ProfileHeader, ProfileVersion,
    RenderingIntent,
};
pub use tags::{CURVE_SAMPLES, TagData, TextDescription, ToneCurve, XyzTag};
pub use types::{DateTimeNumber, S15Fixed16, TagSignature, TypeSignature, XyzNumber};
pub use writer::{ProfileWriter, TAG_ALIGNMENT, TAG_ENTRY_SIZE, pad_to_boundary};

/// D50 standard illuminant, the connection-space reference white
pub const D50_ILLUMINANT: XyzNumber = XyzNumber::new(
    S15Fixed16::from_raw(0x0000_F6D6),
    S15Fixed16::from_raw(0x0001_0000),
    S15Fixed16::from_raw(0x0000_D32D),
);
