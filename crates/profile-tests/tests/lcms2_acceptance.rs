//! Acceptance by a reference CMS
//!
//! lcms2 stands in for the downstream consumers: if it refuses the profile,
//! real color pipelines will too. These tests gate the fixed header codes
//! and the tag shapes through an independent implementation instead of our
//! own layout helpers.

use lcms2::{
    ColorSpaceSignature, InfoType, Intent, Locale, PixelFormat, Profile, ProfileClassSignature,
    Transform,
};
use scankit_cli::generate::shipped_profile;

fn shipped_bytes() -> Vec<u8> {
    shipped_profile().encode().expect("shipped profile encodes")
}

#[test]
fn test_lcms2_opens_the_profile() {
    let bytes = shipped_bytes();
    Profile::new_icc(&bytes).expect("lcms2 rejected the profile");
}

#[test]
fn test_reports_display_class_rgb() {
    let bytes = shipped_bytes();
    let profile = Profile::new_icc(&bytes).unwrap();

    assert_eq!(profile.device_class(), ProfileClassSignature::DisplayClass);
    assert_eq!(profile.color_space(), ColorSpaceSignature::RgbData);
}

#[test]
fn test_description_is_readable() {
    let bytes = shipped_bytes();
    let profile = Profile::new_icc(&bytes).unwrap();

    let description = profile.info(InfoType::Description, Locale::none());
    assert_eq!(description.as_deref(), Some("Red+22 Test Profile"));
}

#[test]
fn test_transform_toward_srgb_builds() {
    let bytes = shipped_bytes();
    let profile = Profile::new_icc(&bytes).unwrap();
    let srgb = Profile::new_srgb();

    let transform = Transform::new(
        &profile,
        PixelFormat::RGB_8,
        &srgb,
        PixelFormat::RGB_8,
        Intent::Perceptual,
    )
    .expect("lcms2 could not build a transform from the profile");

    let src: Vec<u8> = vec![0, 0, 0, 128, 128, 128, 255, 255, 255];
    let mut dst = vec![0u8; src.len()];
    transform.transform_pixels(&src, &mut dst);
    assert_eq!(dst.len(), src.len());
}
