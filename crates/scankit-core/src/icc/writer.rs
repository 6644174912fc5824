//! ICC Profile Writer
//!
//! Assembles a complete profile byte stream:
//!
//! 1. A 128-byte header with a zeroed size field
//! 2. A tag table: 4-byte count, then 12 bytes per entry
//!    (signature, offset, padded length)
//! 3. Concatenated tag payloads, each padded to a 4-byte boundary
//!
//! The total length is patched into the first 4 bytes once the stream is
//! assembled. Output is byte-for-byte deterministic for identical inputs.

use super::header::{HEADER_SIZE, ProfileHeader};
use super::tags::TagData;
use super::types::TagSignature;

/// Size of one tag table entry: signature(4) + offset(4) + length(4)
pub const TAG_ENTRY_SIZE: usize = 12;

/// Data section alignment boundary
pub const TAG_ALIGNMENT: usize = 4;

/// Append zero bytes until `data` is a multiple of `boundary` long.
/// Padding already-aligned data is a no-op.
pub fn pad_to_boundary(data: &mut Vec<u8>, boundary: usize) {
    let remainder = data.len() % boundary;
    if remainder != 0 {
        data.resize(data.len() + boundary - remainder, 0);
    }
}

/// Profile assembler: header plus an ordered tag list
///
/// Tag order is preserved exactly as added. Consuming tools may depend on
/// conventional ordering even though the format permits any order.
#[derive(Debug, Clone)]
pub struct ProfileWriter {
    header: ProfileHeader,
    tags: Vec<(TagSignature, Vec<u8>)>,
}

impl ProfileWriter {
    pub fn new(header: ProfileHeader) -> Self {
        Self {
            header,
            tags: Vec::new(),
        }
    }

    /// Append a tag; its payload is encoded immediately
    pub fn add_tag(&mut self, signature: TagSignature, data: &TagData) {
        self.tags.push((signature, data.encode()));
    }

    /// Number of tags added so far
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Assemble the final byte stream and patch the size field
    pub fn finish(self) -> Vec<u8> {
        let table_size = 4 + self.tags.len() * TAG_ENTRY_SIZE;
        let mut table = Vec::with_capacity(table_size);
        table.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());

        let mut data_section = Vec::new();
        let mut cursor = HEADER_SIZE + table_size;

        for (signature, payload) in self.tags {
            let mut padded = payload;
            pad_to_boundary(&mut padded, TAG_ALIGNMENT);

            table.extend_from_slice(&signature.to_be_bytes());
            table.extend_from_slice(&(cursor as u32).to_be_bytes());
            table.extend_from_slice(&(padded.len() as u32).to_be_bytes());

            cursor += padded.len();
            data_section.extend_from_slice(&padded);
        }

        let mut profile = Vec::with_capacity(cursor);
        profile.extend_from_slice(&self.header.to_bytes());
        profile.extend_from_slice(&table);
        profile.extend_from_slice(&data_section);

        let total = profile.len() as u32;
        profile[0..4].copy_from_slice(&total.to_be_bytes());

        profile
    }
}
