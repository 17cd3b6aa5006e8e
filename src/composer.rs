use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::canvas::{BoundingBox, Canvas, Color};
use crate::constants::{icon, layout, palette};
use crate::fonts::ResolvedFont;
use crate::text;

const BACKGROUND: Color = Color::rgb(palette::BACKGROUND);
const ACCENT: Color = Color::rgb(palette::ACCENT);
const WHITE: Color = Color::rgb(palette::WHITE);
const DARK: Color = Color::rgb(palette::DARK_OUTLINE);
const LIGHT: Color = Color::rgb(palette::LIGHT_FILL);
const SHADOW: Color = Color::rgba(palette::SHADOW);

/// Paths and byte sizes of one saved icon pair
#[derive(Debug, Clone)]
pub struct SavedIcons {
    pub png_path: PathBuf,
    pub png_bytes: u64,
    pub jpeg_path: PathBuf,
    pub jpeg_bytes: u64,
}

/// Outcome of the advisory size check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    WithinLimit,
    PngTooLarge,
    JpegTooLarge,
}

impl SizeVerdict {
    pub fn message(&self, limit_bytes: u64) -> String {
        let limit = format_limit(limit_bytes);
        match self {
            SizeVerdict::WithinLimit => format!("✅ File sizes are within {}.", limit),
            SizeVerdict::PngTooLarge => {
                format!("⚠️  PNG file exceeds {}. Use the JPEG version instead.", limit)
            }
            SizeVerdict::JpegTooLarge => {
                format!("⚠️  JPEG file exceeds {}. Lower the JPEG quality.", limit)
            }
        }
    }
}

fn format_limit(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format_kb(bytes)
    }
}

fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// Render the full icon composition onto a fresh transparent canvas
pub fn compose(font: &ResolvedFont) -> Result<Canvas> {
    let mut canvas = Canvas::new(icon::SIZE, icon::SIZE)?;
    let center = (icon::CENTER, icon::CENTER);

    draw_backdrop(&mut canvas);
    draw_equation(&mut canvas, font, center)?;
    draw_plane(&mut canvas, (center.0 + layout::PLANE_OFFSET.0, center.1 + layout::PLANE_OFFSET.1));
    draw_brain(&mut canvas, (center.0 + layout::BRAIN_OFFSET.0, center.1 + layout::BRAIN_OFFSET.1));
    draw_symbol_badges(&mut canvas, font, center)?;

    // Final border emphasis
    canvas.ellipse(
        BoundingBox::inset(icon::SIZE, layout::RING_MARGIN),
        None,
        Some((DARK, layout::RING_OUTLINE)),
    );

    Ok(canvas)
}

fn draw_backdrop(canvas: &mut Canvas) {
    canvas.ellipse(
        BoundingBox::inset(icon::SIZE, layout::OUTER_MARGIN),
        Some(BACKGROUND),
        Some((DARK, layout::OUTER_OUTLINE)),
    );
    canvas.ellipse(BoundingBox::inset(icon::SIZE, layout::INNER_MARGIN), Some(LIGHT), None);
    canvas.ellipse(
        BoundingBox::inset(icon::SIZE, layout::CENTER_MARGIN),
        Some(WHITE),
        Some((DARK, layout::CENTER_OUTLINE)),
    );
}

fn draw_equation(canvas: &mut Canvas, font: &ResolvedFont, center: (f32, f32)) -> Result<()> {
    let shadow_center = (center.0 + layout::SHADOW_OFFSET, center.1 + layout::SHADOW_OFFSET);
    let px = layout::EQUATION_FONT_PX;
    text::draw_centered(canvas, font, layout::EQUATION, px, shadow_center, SHADOW)?;
    text::draw_centered(canvas, font, layout::EQUATION, px, center, DARK)
}

/// Plane glyph: a narrow body with a pointed nose and two triangular wings
pub fn plane_polygons((x, y): (f32, f32)) -> [Vec<(f32, f32)>; 3] {
    let body = vec![
        (x, y - 15.0),
        (x + 5.0, y - 10.0),
        (x + 5.0, y + 15.0),
        (x - 5.0, y + 15.0),
        (x - 5.0, y - 10.0),
    ];
    let wing_left = vec![(x - 20.0, y), (x - 5.0, y - 5.0), (x - 5.0, y + 5.0)];
    let wing_right = vec![(x + 20.0, y), (x + 5.0, y - 5.0), (x + 5.0, y + 5.0)];
    [body, wing_left, wing_right]
}

fn draw_plane(canvas: &mut Canvas, at: (f32, f32)) {
    for polygon in plane_polygons(at) {
        canvas.polygon(&polygon, ACCENT, Some((DARK, layout::DETAIL_OUTLINE)));
    }
}

fn draw_brain(canvas: &mut Canvas, (x, y): (f32, f32)) {
    canvas.ellipse(
        BoundingBox::around(x, y, layout::BRAIN_HALF_WIDTH, layout::BRAIN_HALF_HEIGHT),
        Some(ACCENT),
        Some((DARK, layout::DETAIL_OUTLINE)),
    );

    // Three folds across the lower half
    for i in -1..=1 {
        let y_offset = i as f32 * layout::BRAIN_FOLD_SPACING;
        let fold = BoundingBox::around(
            x,
            y + y_offset,
            layout::BRAIN_HALF_WIDTH - layout::BRAIN_FOLD_INSET,
            layout::BRAIN_HALF_HEIGHT,
        );
        canvas.arc(fold, 0.0, 180.0, DARK, layout::DETAIL_OUTLINE);
    }
}

/// Badge centres on the orbit, truncated to whole pixels
pub fn symbol_positions(center: (f32, f32)) -> [(f32, f32); 5] {
    layout::SYMBOL_ANGLES_DEG.map(|deg| {
        let rad = deg.to_radians();
        (
            center.0 + (layout::SYMBOL_ORBIT_RADIUS * rad.cos()).trunc(),
            center.1 + (layout::SYMBOL_ORBIT_RADIUS * rad.sin()).trunc(),
        )
    })
}

fn draw_symbol_badges(canvas: &mut Canvas, font: &ResolvedFont, center: (f32, f32)) -> Result<()> {
    for (symbol, at) in layout::SYMBOLS.iter().zip(symbol_positions(center)) {
        let r = layout::SYMBOL_BADGE_RADIUS;
        canvas.ellipse(
            BoundingBox::around(at.0, at.1, r, r),
            Some(ACCENT),
            Some((DARK, layout::DETAIL_OUTLINE)),
        );
        text::draw_centered(canvas, font, symbol, layout::SYMBOL_FONT_PX, at, DARK)?;
    }
    Ok(())
}

/// Encode the canvas as PNG (alpha kept) and JPEG (flattened onto white) under `dir`.
///
/// Creates `dir` when missing and overwrites existing files.
pub fn save(canvas: &Canvas, dir: &Path, jpeg_quality: u8) -> Result<SavedIcons> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let png_path = dir.join(icon::PNG_FILE_NAME);
    write_png(&png_path, canvas)?;

    let jpeg_path = dir.join(icon::JPEG_FILE_NAME);
    write_jpeg(&jpeg_path, canvas, jpeg_quality)?;

    Ok(SavedIcons {
        png_bytes: file_size(&png_path)?,
        png_path,
        jpeg_bytes: file_size(&jpeg_path)?,
        jpeg_path,
    })
}

fn write_png(path: &Path, canvas: &Canvas) -> Result<()> {
    let img = canvas.to_rgba_image();
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    PngEncoder::new_with_quality(BufWriter::new(file), CompressionType::Best, FilterType::Adaptive)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .with_context(|| format!("Failed to encode PNG {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn write_jpeg(path: &Path, canvas: &Canvas, quality: u8) -> Result<()> {
    let img = canvas.to_rgb_on_white();
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    JpegEncoder::new_with_quality(BufWriter::new(file), quality)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .with_context(|| format!("Failed to encode JPEG {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len())
}

/// Advisory only: the PNG is checked first, the JPEG only if the PNG fits
pub fn check_size(saved: &SavedIcons, limit_bytes: u64) -> SizeVerdict {
    if saved.png_bytes > limit_bytes {
        SizeVerdict::PngTooLarge
    } else if saved.jpeg_bytes > limit_bytes {
        SizeVerdict::JpegTooLarge
    } else {
        SizeVerdict::WithinLimit
    }
}

/// Compose, save and print the status report
pub fn run(
    font: &ResolvedFont,
    dir: &Path,
    jpeg_quality: u8,
    size_limit: u64,
) -> Result<SavedIcons> {
    println!("Generating app icon...");
    println!("  Font: {}", font.describe());

    let canvas = compose(font)?;
    let saved = save(&canvas, dir, jpeg_quality)?;

    println!("✅ App icon created!");
    println!("📁 PNG: {} ({})", saved.png_path.display(), format_kb(saved.png_bytes));
    println!("📁 JPEG: {} ({})", saved.jpeg_path.display(), format_kb(saved.jpeg_bytes));
    println!("{}", check_size(&saved, size_limit).message(size_limit));

    println!("\n🎯 Icon features:");
    println!("• Size: {}x{}px", icon::SIZE, icon::SIZE);
    println!("• Brain training + math theme");
    println!("• Educational blue palette");
    println!("• Plane and math symbols");
    println!("• Round, modern layout");

    Ok(saved)
}
