//! ICC Profile Tag Encoding
//!
//! Tags carry the actual profile data. Each encoded tag payload starts with:
//! - A 4-byte type signature identifying the data format
//! - 4 reserved zero bytes
//! - Type-specific data
//!
//! The writer pairs each payload with its 4-byte tag signature in the tag
//! table and pads it to a 4-byte boundary in the data section.

mod curves;
mod text;
mod xyz;

pub use curves::{CURVE_SAMPLES, ToneCurve};
pub use text::TextDescription;
pub use xyz::XyzTag;

/// Tag payload ready for encoding
#[derive(Debug, Clone)]
pub enum TagData {
    /// Curve type (TRC)
    Curve(ToneCurve),
    /// Text description
    Text(TextDescription),
    /// XYZ type data (colorants, white point)
    Xyz(XyzTag),
}

impl TagData {
    /// Encode the payload, type signature and reserved bytes included
    pub fn encode(&self) -> Vec<u8> {
        match self {
            TagData::Curve(curve) => curve.encode(),
            TagData::Text(text) => text.encode(),
            TagData::Xyz(xyz) => xyz.encode(),
        }
    }
}
