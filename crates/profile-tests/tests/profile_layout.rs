//! Container layout checks
//!
//! These pin the byte-level contract of the assembled profile: the patched
//! size field, the tag table bookkeeping, and the padded data section.

use profile_tests::layout::{self, HEADER_SIZE, TAG_ENTRY_SIZE};
use scankit_core::icc::pad_to_boundary;
use scankit_core::{ChannelOffsets, ShiftProfile};

fn red_22_profile() -> Vec<u8> {
    ShiftProfile::new(
        ChannelOffsets::red_only(22),
        "Red+22 Test Profile",
        "Public Domain",
    )
    .encode()
    .expect("encoding the shipped profile shape cannot fail")
}

#[test]
fn test_size_field_matches_total_length() {
    let profile = red_22_profile();
    assert_eq!(layout::declared_size(&profile), profile.len());
    assert_eq!(profile.len() % 4, 0);
}

#[test]
fn test_tag_count_and_order() {
    let profile = red_22_profile();
    assert_eq!(layout::tag_count(&profile), 9);

    let signatures: Vec<[u8; 4]> = layout::read_tag_table(&profile)
        .iter()
        .map(|e| e.signature)
        .collect();
    let expected = [
        *b"desc", *b"cprt", *b"wtpt", *b"rXYZ", *b"gXYZ", *b"bXYZ", *b"rTRC", *b"gTRC", *b"bTRC",
    ];
    assert_eq!(signatures, expected);
}

#[test]
fn test_spans_cover_data_section_without_overlap() {
    let profile = red_22_profile();
    let table = layout::read_tag_table(&profile);

    let data_start = HEADER_SIZE + 4 + table.len() * TAG_ENTRY_SIZE;
    let mut cursor = data_start;

    for entry in &table {
        // Offsets strictly increase and spans stay in bounds
        assert!(entry.offset >= cursor, "tag {:?} overlaps", entry.signature);
        let gap = entry.offset - cursor;
        assert!(gap < 4, "gap of {} before {:?}", gap, entry.signature);
        assert!(entry.offset + entry.size <= profile.len());
        cursor = entry.offset + entry.size;
    }

    // Padded payloads are adjacent, so the last span ends the profile
    assert_eq!(cursor, profile.len());
}

#[test]
fn test_curve_tags_share_layout_differ_in_content() {
    let profile = red_22_profile();
    let red = layout::find_tag(&profile, b"rTRC").unwrap();
    let green = layout::find_tag(&profile, b"gTRC").unwrap();

    assert_eq!(red.len(), 524);
    assert_eq!(green.len(), 524);
    // Same type signature, reserved field, and count
    assert_eq!(&red[0..12], &green[0..12]);
    // Different samples
    assert_ne!(&red[12..], &green[12..]);

    // Green is the identity ramp; red is shifted
    let green_samples = layout::curve_samples(green);
    assert_eq!(green_samples[0], 0);
    assert_eq!(green_samples[255], 65535);
    let red_samples = layout::curve_samples(red);
    assert_eq!(red_samples[0], 22 * 257);
}

#[test]
fn test_description_payload_is_nul_terminated_ascii() {
    let profile = red_22_profile();
    let desc = layout::find_tag(&profile, b"desc").unwrap();

    assert_eq!(&desc[0..4], b"desc");
    let text = "Red+22 Test Profile";
    assert_eq!(layout::read_u32_be(desc, 8) as usize, text.len() + 1);
    assert_eq!(&desc[12..12 + text.len()], text.as_bytes());
    assert_eq!(desc[12 + text.len()], 0);
}

#[test]
fn test_xyz_tags_are_twenty_bytes() {
    let profile = red_22_profile();
    for sig in [b"wtpt", b"rXYZ", b"gXYZ", b"bXYZ"] {
        let payload = layout::find_tag(&profile, sig).unwrap();
        assert_eq!(payload.len(), 20, "tag {:?}", sig);
        assert_eq!(&payload[0..4], b"XYZ ");
    }
    // White point is D50
    let wtpt = layout::find_tag(&profile, b"wtpt").unwrap();
    assert_eq!(&wtpt[8..20], &[
        0x00, 0x00, 0xF6, 0xD6, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0xD3, 0x2D
    ]);
}

#[test]
fn test_padding_is_idempotent() {
    for initial_len in 0..9usize {
        let mut once = vec![0xABu8; initial_len];
        pad_to_boundary(&mut once, 4);
        let mut twice = once.clone();
        pad_to_boundary(&mut twice, 4);

        assert_eq!(once, twice);
        assert_eq!(once.len() % 4, 0);
        assert!(once.len() - initial_len < 4);
    }
}
