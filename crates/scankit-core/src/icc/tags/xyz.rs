//! XYZ Tag Type
//!
//! The XYZType holds an array of XYZ values. Used here for the white point
//! and the three colorant tags, each carrying a single value.

use crate::icc::types::{TypeSignature, XyzNumber};

/// XYZ tag data - one or more XYZ values
#[derive(Debug, Clone, PartialEq)]
pub struct XyzTag {
    /// XYZ values stored in the tag
    pub values: Vec<XyzNumber>,
}

impl XyzTag {
    /// Tag holding a single XYZ value (white point, colorant)
    pub fn single(value: XyzNumber) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Encode as an 'XYZ ' tag: type signature, 4 reserved bytes, then each
    /// value as three big-endian s15Fixed16 numbers. 20 bytes for a single
    /// value, already 4-byte aligned.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.values.len() * 12);
        out.extend_from_slice(&TypeSignature::XYZ.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        for value in &self.values {
            out.extend_from_slice(&value.to_bytes());
        }
        out
    }
}
