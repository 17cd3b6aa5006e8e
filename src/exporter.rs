use anyhow::{Context, Result, bail};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::android;

/// One written launcher icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub bucket: &'static str,
    pub size: u32,
    pub path: PathBuf,
}

/// Load the base icon, refusing missing, undecodable or non-square input
pub fn load_base_icon(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        bail!(
            "Base icon not found at {} (run create-app-icon first)",
            path.display()
        );
    }

    let img = image::open(path)
        .with_context(|| format!("Failed to decode base icon {}", path.display()))?
        .to_rgba8();

    if img.width() != img.height() {
        bail!(
            "Base icon {} must be square, got {}x{}",
            path.display(),
            img.width(),
            img.height()
        );
    }

    Ok(img)
}

/// Write `<out_dir>/<bucket>/ic_launcher.png` for every density bucket, smallest first
pub fn export(base_png: &Path, out_dir: &Path) -> Result<Vec<ExportedIcon>> {
    let base = load_base_icon(base_png)?;

    let mut exported = Vec::with_capacity(android::DENSITY_MAP.len());
    for (bucket, size) in android::DENSITY_MAP {
        let folder = out_dir.join(bucket);
        fs::create_dir_all(&folder)
            .with_context(|| format!("Failed to create {}", folder.display()))?;

        let resized = imageops::resize(&base, size, size, FilterType::Lanczos3);
        let path = folder.join(android::LAUNCHER_FILE_NAME);
        write_png(&path, &resized)?;
        debug!("Wrote {} ({}x{})", path.display(), size, size);

        exported.push(ExportedIcon { bucket, size, path });
    }

    Ok(exported)
}

fn write_png(path: &Path, img: &RgbaImage) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    PngEncoder::new_with_quality(BufWriter::new(file), CompressionType::Best, PngFilter::Adaptive)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .with_context(|| format!("Failed to encode PNG {}", path.display()))
}

/// Export and print the status report
pub fn run(base_png: &Path, out_dir: &Path) -> Result<Vec<ExportedIcon>> {
    println!("Generating Android icons...");

    let exported = export(base_png, out_dir)?;
    for icon in &exported {
        println!(
            "✅ {}/{} ({}x{}px)",
            icon.bucket,
            android::LAUNCHER_FILE_NAME,
            icon.size,
            icon.size
        );
    }

    println!("\n🎯 Android icons done!");
    println!("📁 Output folder: {}/", out_dir.display());
    println!("📱 Copy each mipmap folder's ic_launcher.png into");
    println!("   the matching folder under android/app/src/main/res/");
    println!("   (or run `app-icon-kit install`).");

    Ok(exported)
}
