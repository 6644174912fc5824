//! Tag table walking
//!
//! A minimal read-side view of the fixed container layout, just enough for
//! the tests to locate tags and check spans. This is intentionally not a
//! profile parser; it trusts the sizes it reads.

/// Header size in bytes
pub const HEADER_SIZE: usize = 128;

/// Size of one tag table entry
pub const TAG_ENTRY_SIZE: usize = 12;

/// One tag table entry as stored in the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub signature: [u8; 4],
    pub offset: usize,
    pub size: usize,
}

/// Read a big-endian u32 at `at`
pub fn read_u32_be(data: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// The declared profile size (bytes 0..4)
pub fn declared_size(profile: &[u8]) -> usize {
    read_u32_be(profile, 0) as usize
}

/// The tag count field just past the header
pub fn tag_count(profile: &[u8]) -> usize {
    read_u32_be(profile, HEADER_SIZE) as usize
}

/// All tag table entries, in table order
pub fn read_tag_table(profile: &[u8]) -> Vec<TagEntry> {
    let count = tag_count(profile);
    (0..count)
        .map(|i| {
            let at = HEADER_SIZE + 4 + i * TAG_ENTRY_SIZE;
            let mut signature = [0u8; 4];
            signature.copy_from_slice(&profile[at..at + 4]);
            TagEntry {
                signature,
                offset: read_u32_be(profile, at + 4) as usize,
                size: read_u32_be(profile, at + 8) as usize,
            }
        })
        .collect()
}

/// Locate a tag's payload slice by signature
pub fn find_tag<'a>(profile: &'a [u8], signature: &[u8; 4]) -> Option<&'a [u8]> {
    read_tag_table(profile)
        .into_iter()
        .find(|entry| &entry.signature == signature)
        .map(|entry| &profile[entry.offset..entry.offset + entry.size])
}

/// Decode the sample table of a 'curv' payload
pub fn curve_samples(payload: &[u8]) -> Vec<u16> {
    assert_eq!(&payload[0..4], b"curv", "not a curve payload");
    let count = read_u32_be(payload, 8) as usize;
    (0..count)
        .map(|i| {
            let at = 12 + i * 2;
            u16::from_be_bytes([payload[at], payload[at + 1]])
        })
        .collect()
}
