//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile
//! information. The size field at offset 0 is a forward reference: it is
//! written as zero here and patched by the writer once the full byte stream
//! has been assembled.

use super::types::{DateTimeNumber, XyzNumber};

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header size in bytes
pub const HEADER_SIZE: usize = 128;

/// ICC Profile Header (128 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    /// Preferred CMM type signature (zero: no preference)
    pub cmm_type: u32,
    /// Profile version (major.minor.patch)
    pub version: ProfileVersion,
    /// Device class (display, input, output, etc.)
    pub device_class: ProfileClass,
    /// Color space of device data
    pub color_space: ColorSpace,
    /// Profile connection space
    pub pcs: ColorSpace,
    /// Creation date embedded verbatim; a fixed constant keeps output
    /// byte-for-byte deterministic across runs
    pub creation_date: DateTimeNumber,
    /// Primary platform signature
    pub platform: u32,
    /// Profile flags
    pub flags: u32,
    /// Device manufacturer signature
    pub manufacturer: u32,
    /// Device model signature
    pub model: u32,
    /// Device attributes
    pub attributes: u64,
    /// Rendering intent
    pub rendering_intent: RenderingIntent,
    /// PCS illuminant (D50)
    pub illuminant: XyzNumber,
    /// Profile creator signature
    pub creator: u32,
    /// Profile ID (MD5 hash, or zero)
    pub profile_id: [u8; 16],
}

impl ProfileHeader {
    /// Header for the display-class RGB profile shape this encoder emits
    pub fn display_rgb() -> Self {
        Self {
            cmm_type: 0,
            version: ProfileVersion {
                major: 2,
                minor: 1,
                patch: 0,
            },
            device_class: ProfileClass::Display,
            color_space: ColorSpace::Rgb,
            pcs: ColorSpace::Xyz,
            creation_date: DateTimeNumber {
                year: 2025,
                month: 11,
                day: 10,
                ..Default::default()
            },
            platform: u32::from_be_bytes(*b"MSFT"),
            flags: 0,
            manufacturer: 0,
            model: 0,
            attributes: 0,
            rendering_intent: RenderingIntent::Perceptual,
            illuminant: super::D50_ILLUMINANT,
            creator: u32::from_be_bytes(*b"scnk"),
            profile_id: [0u8; 16],
        }
    }

    /// Serialize to the fixed 128-byte layout. The size field is left zero.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];

        // 0..4 is the profile size placeholder, patched after assembly
        out[4..8].copy_from_slice(&self.cmm_type.to_be_bytes());
        out[8..12].copy_from_slice(&self.version.to_bytes());
        out[12..16].copy_from_slice(&self.device_class.to_u32().to_be_bytes());
        out[16..20].copy_from_slice(&self.color_space.to_u32().to_be_bytes());
        out[20..24].copy_from_slice(&self.pcs.to_u32().to_be_bytes());
        out[24..36].copy_from_slice(&self.creation_date.to_bytes());
        out[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
        out[40..44].copy_from_slice(&self.platform.to_be_bytes());
        out[44..48].copy_from_slice(&self.flags.to_be_bytes());
        out[48..52].copy_from_slice(&self.manufacturer.to_be_bytes());
        out[52..56].copy_from_slice(&self.model.to_be_bytes());
        out[56..64].copy_from_slice(&self.attributes.to_be_bytes());
        out[64..68].copy_from_slice(&self.rendering_intent.to_u32().to_be_bytes());
        out[68..80].copy_from_slice(&self.illuminant.to_bytes());
        out[80..84].copy_from_slice(&self.creator.to_be_bytes());
        out[84..100].copy_from_slice(&self.profile_id);
        // 100..128 reserved, zero

        out
    }
}

/// ICC Profile Version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl ProfileVersion {
    /// Serialize to the packed 4-byte header field
    pub fn to_bytes(self) -> [u8; 4] {
        [self.major, (self.minor << 4) | (self.patch & 0x0F), 0, 0]
    }
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
}

impl ProfileClass {
    pub fn to_u32(self) -> u32 {
        match self {
            Self::Input => u32::from_be_bytes(*b"scnr"),
            Self::Display => u32::from_be_bytes(*b"mntr"),
            Self::Output => u32::from_be_bytes(*b"prtr"),
        }
    }

    pub fn from_u32(val: u32) -> Option<Self> {
        match &val.to_be_bytes() {
            b"scnr" => Some(Self::Input),
            b"mntr" => Some(Self::Display),
            b"prtr" => Some(Self::Output),
            _ => None,
        }
    }
}

/// ICC Color Space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// XYZ (used as the connection space)
    Xyz,
    /// RGB (device data)
    Rgb,
}

impl ColorSpace {
    pub fn to_u32(self) -> u32 {
        match self {
            Self::Xyz => u32::from_be_bytes(*b"XYZ "),
            Self::Rgb => u32::from_be_bytes(*b"RGB "),
        }
    }

    pub fn from_u32(val: u32) -> Option<Self> {
        match &val.to_be_bytes() {
            b"XYZ " => Some(Self::Xyz),
            b"RGB " => Some(Self::Rgb),
            _ => None,
        }
    }
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    /// Perceptual - best for photographs
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors
    RelativeColorimetric,
    /// Saturation - maintains saturation
    Saturation,
    /// Absolute colorimetric - preserves white point
    AbsoluteColorimetric,
}

impl RenderingIntent {
    pub fn to_u32(self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::RelativeColorimetric => 1,
            Self::Saturation => 2,
            Self::AbsoluteColorimetric => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fixed_fields() {
        let bytes = ProfileHeader::display_rgb().to_bytes();

        // Size placeholder stays zero until the writer patches it
        assert_eq!(&bytes[0..4], &[0u8; 4]);
        assert_eq!(&bytes[8..12], &[0x02, 0x10, 0x00, 0x00]);
        assert_eq!(&bytes[12..16], b"mntr");
        assert_eq!(&bytes[16..20], b"RGB ");
        assert_eq!(&bytes[20..24], b"XYZ ");
        assert_eq!(&bytes[36..40], b"acsp");
        assert_eq!(&bytes[40..44], b"MSFT");
        // D50 illuminant
        assert_eq!(&bytes[68..72], &[0x00, 0x00, 0xF6, 0xD6]);
        assert_eq!(&bytes[72..76], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(&bytes[76..80], &[0x00, 0x00, 0xD3, 0x2D]);
        // Reserved tail is zero
        assert_eq!(&bytes[100..128], &[0u8; 28]);
    }

    #[test]
    fn test_profile_class_roundtrip() {
        for class in [ProfileClass::Input, ProfileClass::Display, ProfileClass::Output] {
            assert_eq!(ProfileClass::from_u32(class.to_u32()), Some(class));
        }
        assert_eq!(ProfileClass::from_u32(0), None);
    }

    #[test]
    fn test_color_space_roundtrip() {
        for space in [ColorSpace::Rgb, ColorSpace::Xyz] {
            assert_eq!(ColorSpace::from_u32(space.to_u32()), Some(space));
        }
    }

    #[test]
    fn test_version_packing() {
        let v21 = ProfileVersion {
            major: 2,
            minor: 1,
            patch: 0,
        };
        assert_eq!(v21.to_bytes(), [0x02, 0x10, 0x00, 0x00]);

        let v43 = ProfileVersion {
            major: 4,
            minor: 3,
            patch: 0,
        };
        assert_eq!(v43.to_bytes(), [0x04, 0x30, 0x00, 0x00]);
    }
}
