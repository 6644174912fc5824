//! Channel-Shift Profile
//!
//! High-level description of the one profile shape this crate produces: a
//! display-class RGB matrix/TRC profile whose tone curves shift each channel
//! by a constant 8-bit offset. Nine tags, in a fixed conventional order:
//! description, copyright, white point, the three colorants, then the three
//! tone curves.

use crate::error::Result;
use crate::icc::{
    D50_ILLUMINANT, ProfileHeader, ProfileWriter, S15Fixed16, TagData, TagSignature,
    TextDescription, ToneCurve, XyzNumber, XyzTag,
};

/// Media white point (D50, identical to the header illuminant)
pub const WHITE_POINT: XyzNumber = D50_ILLUMINANT;

/// Red colorant
pub const RED_COLORANT: XyzNumber = XyzNumber::new(
    S15Fixed16::from_raw(0x0000_F351),
    S15Fixed16::from_raw(0x0001_0000),
    S15Fixed16::from_raw(0x0000_D32D),
);

/// Green colorant
pub const GREEN_COLORANT: XyzNumber = XyzNumber::new(
    S15Fixed16::from_raw(0x0000_6FA2),
    S15Fixed16::from_raw(0x0001_0000),
    S15Fixed16::from_raw(0x0000_D32D),
);

/// Blue colorant
pub const BLUE_COLORANT: XyzNumber = XyzNumber::new(
    S15Fixed16::from_raw(0x0000_6FA2),
    S15Fixed16::from_raw(0x0001_0000),
    S15Fixed16::from_raw(0x0000_D32D),
);

/// Number of tags in the assembled profile
pub const TAG_COUNT: usize = 9;

/// Per-channel tone curve offsets, in 8-bit units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelOffsets {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl ChannelOffsets {
    /// Shift only the red channel
    pub fn red_only(amount: i32) -> Self {
        Self {
            red: amount,
            ..Default::default()
        }
    }
}

/// Declarative description of a channel-shift profile
#[derive(Debug, Clone)]
pub struct ShiftProfile {
    pub offsets: ChannelOffsets,
    pub description: String,
    pub copyright: String,
}

impl ShiftProfile {
    pub fn new(
        offsets: ChannelOffsets,
        description: impl Into<String>,
        copyright: impl Into<String>,
    ) -> Self {
        Self {
            offsets,
            description: description.into(),
            copyright: copyright.into(),
        }
    }

    /// Assemble the complete profile byte stream.
    ///
    /// Text fields are validated before any bytes are produced; the only
    /// error path is a non-ASCII description or copyright.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let description = TextDescription::new("description", &self.description)?;
        let copyright = TextDescription::new("copyright", &self.copyright)?;

        let mut writer = ProfileWriter::new(ProfileHeader::display_rgb());

        writer.add_tag(TagSignature::DESC, &TagData::Text(description));
        writer.add_tag(TagSignature::COPYRIGHT, &TagData::Text(copyright));
        writer.add_tag(TagSignature::MEDIA_WHITE, &TagData::Xyz(XyzTag::single(WHITE_POINT)));
        writer.add_tag(TagSignature::RED_COLORANT, &TagData::Xyz(XyzTag::single(RED_COLORANT)));
        writer.add_tag(TagSignature::GREEN_COLORANT, &TagData::Xyz(XyzTag::single(GREEN_COLORANT)));
        writer.add_tag(TagSignature::BLUE_COLORANT, &TagData::Xyz(XyzTag::single(BLUE_COLORANT)));
        writer.add_tag(
            TagSignature::RED_TRC,
            &TagData::Curve(ToneCurve::from_offset(self.offsets.red)),
        );
        writer.add_tag(
            TagSignature::GREEN_TRC,
            &TagData::Curve(ToneCurve::from_offset(self.offsets.green)),
        );
        writer.add_tag(
            TagSignature::BLUE_TRC,
            &TagData::Curve(ToneCurve::from_offset(self.offsets.blue)),
        );
        debug_assert_eq!(writer.tag_count(), TAG_COUNT);

        Ok(writer.finish())
    }
}
