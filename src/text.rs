use anyhow::{Context, Result};
use resvg::tiny_skia::{Rect, Transform};
use resvg::usvg;
use tracing::debug;

use crate::bitmap_font;
use crate::canvas::{BoundingBox, Canvas, Color};
use crate::fonts::{ResolvedFont, ScalableFont};

/// Draw `text` so the centre of its ink bounding box lands on `center`.
///
/// Centring uses the measured box, so it holds whichever font was resolved.
pub fn draw_centered(
    canvas: &mut Canvas,
    font: &ResolvedFont,
    text: &str,
    font_px: f32,
    center: (f32, f32),
    color: Color,
) -> Result<()> {
    if let ResolvedFont::Scalable(scalable) = font {
        let tree = layout_scalable(scalable, text, font_px, color)?;
        if let Some(ink) = measure(&tree) {
            let (cx, cy) = ink.center();
            let transform = Transform::from_translate(center.0 - cx, center.1 - cy);
            resvg::render(&tree, transform, &mut canvas.pixmap_mut());
            return Ok(());
        }
        debug!(
            "{} produced no outlines for {:?}, using bitmap glyphs",
            scalable.family, text
        );
    }

    draw_bitmap_centered(canvas, text, font_px, center, color);
    Ok(())
}

/// Ink box of a laid-out tree: the glyph outlines, not the line box
fn measure(tree: &usvg::Tree) -> Option<BoundingBox> {
    ink_bounds(tree.root())
}

fn ink_bounds(group: &usvg::Group) -> Option<BoundingBox> {
    group.children().iter().fold(None, |acc, node| {
        let bounds = match node {
            usvg::Node::Group(group) => ink_bounds(group),
            usvg::Node::Text(text) if text.flattened().has_children() => {
                Some(to_box(text.flattened().abs_bounding_box()))
            }
            usvg::Node::Path(path) => Some(to_box(path.abs_bounding_box())),
            usvg::Node::Text(_) | usvg::Node::Image(_) => None,
        };
        match (acc, bounds) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        }
    })
}

fn to_box(rect: Rect) -> BoundingBox {
    BoundingBox::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

fn layout_scalable(
    font: &ScalableFont,
    text: &str,
    font_px: f32,
    color: Color,
) -> Result<usvg::Tree> {
    // Baseline at one em so the glyphs start inside the viewport
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
            r#"<text x="0" y="{px}" font-family="{family}" font-size="{px}" "#,
            r#"fill="rgb({r},{g},{b})" fill-opacity="{opacity}">{text}</text></svg>"#,
        ),
        w = (font_px * text.chars().count().max(1) as f32).ceil(),
        h = (font_px * 2.0).ceil(),
        px = font_px,
        family = escape_xml(&font.family),
        r = color.r,
        g = color.g,
        b = color.b,
        opacity = f32::from(color.a) / 255.0,
        text = escape_xml(text),
    );

    let mut options = usvg::Options::default();
    options.font_family = font.family.clone();
    options.fontdb = font.database.clone();

    usvg::Tree::from_str(&svg, &options)
        .with_context(|| format!("Failed to lay out {:?} with {}", text, font.family))
}

fn measure_bitmap(text: &str, font_px: f32) -> Option<BoundingBox> {
    let scale = bitmap_font::scale_for(font_px) as f32;
    let (left, top, right, bottom) = bitmap_font::ink_extent(&bitmap_font::cells(text))?;
    Some(BoundingBox::new(
        left as f32 * scale,
        top as f32 * scale,
        right as f32 * scale,
        bottom as f32 * scale,
    ))
}

fn draw_bitmap_centered(
    canvas: &mut Canvas,
    text: &str,
    font_px: f32,
    center: (f32, f32),
    color: Color,
) {
    let Some(ink) = measure_bitmap(text, font_px) else {
        return;
    };
    let scale = bitmap_font::scale_for(font_px) as f32;

    // Snap to whole pixels so every cell stays crisp
    let origin_x = (center.0 - ink.width() / 2.0).round() - ink.left;
    let origin_y = (center.1 - ink.height() / 2.0).round() - ink.top;

    for (col, row) in bitmap_font::cells(text) {
        canvas.rect(
            origin_x + col as f32 * scale,
            origin_y + row as f32 * scale,
            scale,
            scale,
            color,
        );
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
