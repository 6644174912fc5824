//! Text Tag Type
//!
//! Profile description and copyright are stored as v2 'desc' tags: an
//! ASCII string plus zeroed Unicode and ScriptCode sections. The tag shape
//! has no defined encoding for bytes outside ASCII, so those are rejected
//! at construction rather than silently mangled.

use crate::error::{EncodeError, Result};
use crate::icc::types::TypeSignature;

/// A validated ASCII profile description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDescription {
    field: &'static str,
    text: String,
}

impl TextDescription {
    /// Validate and wrap a text field. `field` names the profile field for
    /// error reporting ("description", "copyright").
    pub fn new(field: &'static str, text: &str) -> Result<Self> {
        if let Some((position, &byte)) = text.as_bytes().iter().enumerate().find(|(_, b)| !b.is_ascii()) {
            return Err(EncodeError::NonAsciiText {
                field,
                byte,
                position,
            });
        }
        Ok(Self {
            field,
            text: text.to_owned(),
        })
    }

    /// The validated text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The profile field this text belongs to
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Encode as a 'desc' tag: type signature, 4 reserved bytes, big-endian
    /// ASCII length (including the NUL), the ASCII bytes plus NUL, then the
    /// unused Unicode section (4-byte code, 4-byte length) and ScriptCode
    /// section (2-byte code, 1-byte length), all zero.
    pub fn encode(&self) -> Vec<u8> {
        let ascii = self.text.as_bytes();
        let mut out = Vec::with_capacity(ascii.len() + 24);
        out.extend_from_slice(&TypeSignature::DESC.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&((ascii.len() + 1) as u32).to_be_bytes());
        out.extend_from_slice(ascii);
        out.push(0);
        out.extend_from_slice(&0u32.to_be_bytes()); // Unicode language code
        out.extend_from_slice(&0u32.to_be_bytes()); // Unicode length
        out.extend_from_slice(&0u16.to_be_bytes()); // ScriptCode code
        out.push(0); // ScriptCode length
        out
    }
}
