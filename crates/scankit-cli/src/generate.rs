//! Generation entry points
//!
//! The binaries are thin wrappers over these functions so the integration
//! tests can drive the exact code path the command line runs, pointed at a
//! scratch directory instead of the working directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use scankit_core::{ChannelOffsets, ShiftProfile};
use scankit_icon::{ICON_SIZES, PREVIEW_SIZE, encode_ico, encode_png, scanner_icon};

use crate::output::write_atomic;

/// Fixed output name for the profile generator
pub const PROFILE_FILE_NAME: &str = "red_plus_22.icc";

/// Fixed output names for the icon generator
pub const ICON_FILE_NAME: &str = "scanner_icon.ico";
pub const PREVIEW_FILE_NAME: &str = "scanner_icon_preview.png";

/// Red-channel boost applied by the shipped profile, in 8-bit units
pub const RED_BOOST: i32 = 22;

/// The profile the generator ships
pub fn shipped_profile() -> ShiftProfile {
    ShiftProfile::new(
        ChannelOffsets::red_only(RED_BOOST),
        "Red+22 Test Profile",
        "Public Domain",
    )
}

/// Outcome of a profile generation run
pub struct ProfileReport {
    pub path: PathBuf,
    pub size: usize,
}

/// Encode a profile and commit it to `dir`
///
/// Validation happens before anything touches the filesystem, and the write
/// itself is atomic, so a failed run leaves no file at the output path.
pub fn write_profile(dir: &Path, profile: &ShiftProfile) -> anyhow::Result<ProfileReport> {
    let bytes = profile.encode()?;
    let path = dir.join(PROFILE_FILE_NAME);
    write_atomic(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(ProfileReport {
        path,
        size: bytes.len(),
    })
}

/// Generate the shipped red-boost profile into `dir`
pub fn generate_profile(dir: &Path) -> anyhow::Result<ProfileReport> {
    write_profile(dir, &shipped_profile())
}

/// Outcome of an icon generation run
pub struct IconReport {
    pub ico_path: PathBuf,
    pub ico_size: usize,
    pub preview_path: PathBuf,
    pub preview_size: usize,
    pub sizes: &'static [u32],
}

/// Render the scanner icon set and commit the ICO and PNG preview to `dir`
pub fn generate_icon(dir: &Path) -> anyhow::Result<IconReport> {
    let frames: Vec<_> = ICON_SIZES.iter().map(|&size| scanner_icon(size)).collect();

    let ico_bytes = encode_ico(&frames).context("encoding ICO container")?;
    let ico_path = dir.join(ICON_FILE_NAME);
    write_atomic(&ico_path, &ico_bytes)
        .with_context(|| format!("writing {}", ico_path.display()))?;
    info!("wrote {} ({} bytes)", ico_path.display(), ico_bytes.len());

    let png_bytes = encode_png(&scanner_icon(PREVIEW_SIZE)).context("encoding PNG preview")?;
    let preview_path = dir.join(PREVIEW_FILE_NAME);
    write_atomic(&preview_path, &png_bytes)
        .with_context(|| format!("writing {}", preview_path.display()))?;
    info!("wrote {} ({} bytes)", preview_path.display(), png_bytes.len());

    Ok(IconReport {
        ico_path,
        ico_size: ico_bytes.len(),
        preview_path,
        preview_size: png_bytes.len(),
        sizes: ICON_SIZES,
    })
}
