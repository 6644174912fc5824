//! Error types for scankit-core

use thiserror::Error;

/// Result type for profile encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while encoding a profile
///
/// Encoding is infallible except for text validation: the `desc` tag shape
/// has no defined encoding for bytes outside the ASCII range, so those are
/// rejected before any profile bytes are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// A text field contains a byte outside the ASCII range
    #[error("{field} contains non-ASCII byte 0x{byte:02X} at position {position}")]
    NonAsciiText {
        field: &'static str,
        byte: u8,
        position: usize,
    },
}
