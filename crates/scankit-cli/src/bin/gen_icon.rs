//! Emits the scanner tray icon (ICO plus PNG preview) into the current
//! directory.

use std::path::Path;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use scankit_cli::generate::generate_icon;
use scankit_icon::PREVIEW_SIZE;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let report = generate_icon(Path::new("."))?;

    let sizes = report
        .sizes
        .iter()
        .map(|s| format!("{}x{}", s, s))
        .collect::<Vec<_>>()
        .join(", ");

    println!("Created scanner icon: {}", report.ico_path.display());
    println!("  Sizes included: {}", sizes);
    println!(
        "Created preview: {} ({}x{})",
        report.preview_path.display(),
        PREVIEW_SIZE,
        PREVIEW_SIZE
    );

    Ok(())
}
