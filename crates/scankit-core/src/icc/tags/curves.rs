//! Curve Tag Type
//!
//! Tone reproduction curves (TRC) are stored as 'curv' lookup tables.
//! This encoder always emits the 256-entry table form: each 8-bit input
//! level maps to a 16-bit output sample.

use crate::icc::types::TypeSignature;

/// Number of samples in an 8-bit-indexed tone curve table
pub const CURVE_SAMPLES: usize = 256;

/// A tone reproduction curve table
///
/// Built as a linear ramp with a constant additive offset applied in 8-bit
/// space before rescaling to 16-bit. Constant offsets keep the table
/// monotonically non-decreasing by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneCurve {
    table: Vec<u16>,
}

impl ToneCurve {
    /// Build a curve that shifts every input level by `offset` (in 8-bit
    /// units), saturating at the [0, 255] boundaries
    pub fn from_offset(offset: i32) -> Self {
        let table = (0..CURVE_SAMPLES as i32)
            .map(|i| {
                let clamped = (i + offset).clamp(0, 255);
                (clamped as f64 / 255.0 * 65535.0).round() as u16
            })
            .collect();
        Self { table }
    }

    /// The identity ramp (offset 0)
    pub fn identity() -> Self {
        Self::from_offset(0)
    }

    /// Curve samples in input order
    pub fn samples(&self) -> &[u16] {
        &self.table
    }

    /// Encode as a 'curv' tag: type signature, 4 reserved bytes, big-endian
    /// count, then the samples as big-endian u16. 524 bytes for a 256-entry
    /// table, already 4-byte aligned.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.table.len() * 2);
        out.extend_from_slice(&TypeSignature::CURVE.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&(self.table.len() as u32).to_be_bytes());
        for &sample in &self.table {
            out.extend_from_slice(&sample.to_be_bytes());
        }
        out
    }
}
