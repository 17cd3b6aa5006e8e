use anyhow::{Context, Result};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use resvg::tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PixmapMut, Rect, Stroke,
    Transform,
};

/// Segments used to approximate an elliptical arc
const ARC_SEGMENTS: u32 = 48;

/// An RGBA colour with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(rgb: [u8; 3]) -> Self {
        Color { r: rgb[0], g: rgb[1], b: rgb[2], a: 255 }
    }

    pub const fn rgba(rgba: [u8; 4]) -> Self {
        Color { r: rgba[0], g: rgba[1], b: rgba[2], a: rgba[3] }
    }

    fn paint(self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(self.r, self.g, self.b, self.a);
        paint.anti_alias = true;
        paint
    }
}

/// Axis-aligned box in the `[left, top, right, bottom]` form the layout uses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        BoundingBox { left, top, right, bottom }
    }

    /// Square box with the same margin on every side of a `size`×`size` canvas
    pub fn inset(size: u32, margin: f32) -> Self {
        let size = size as f32;
        BoundingBox::new(margin, margin, size - margin, size - margin)
    }

    pub fn around(cx: f32, cy: f32, half_width: f32, half_height: f32) -> Self {
        BoundingBox::new(cx - half_width, cy - half_height, cx + half_width, cy + half_height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Shrink by `amount` on every side
    pub fn shrink(&self, amount: f32) -> Self {
        BoundingBox::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    /// Smallest box covering both
    pub fn union(&self, other: &BoundingBox) -> Self {
        BoundingBox::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    fn to_rect(self) -> Option<Rect> {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Fixed-size transparent raster the icon is drawn on
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("Failed to allocate {}x{} canvas", width, height))?;
        Ok(Canvas { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap_mut(&mut self) -> PixmapMut<'_> {
        self.pixmap.as_mut()
    }

    /// Fill an ellipse and draw its outline inside the box, like a stamped badge
    pub fn ellipse(
        &mut self,
        bbox: BoundingBox,
        fill: Option<Color>,
        outline: Option<(Color, f32)>,
    ) {
        if let Some(fill) = fill {
            if let Some(path) = bbox.to_rect().and_then(PathBuilder::from_oval) {
                self.fill(&path, fill);
            }
        }

        if let Some((color, width)) = outline {
            let inner = bbox.shrink(width / 2.0);
            if let Some(path) = inner.to_rect().and_then(PathBuilder::from_oval) {
                self.stroke(&path, color, width);
            }
        }
    }

    /// Closed polygon with an optional centred outline
    pub fn polygon(&mut self, points: &[(f32, f32)], fill: Color, outline: Option<(Color, f32)>) {
        let Some(path) = polyline_path(points, true) else {
            return;
        };

        self.fill(&path, fill);
        if let Some((color, width)) = outline {
            self.stroke(&path, color, width);
        }
    }

    /// Elliptical arc inside `bbox`, angles in degrees measured clockwise from 3 o'clock
    pub fn arc(
        &mut self,
        bbox: BoundingBox,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        width: f32,
    ) {
        let (cx, cy) = bbox.center();
        let rx = bbox.width() / 2.0 - width / 2.0;
        let ry = bbox.height() / 2.0 - width / 2.0;

        let points: Vec<(f32, f32)> = (0..=ARC_SEGMENTS)
            .map(|i| {
                let t = start_deg + (end_deg - start_deg) * i as f32 / ARC_SEGMENTS as f32;
                let rad = t.to_radians();
                (cx + rx * rad.cos(), cy + ry * rad.sin())
            })
            .collect();

        if let Some(path) = polyline_path(&points, false) {
            self.stroke(&path, color, width);
        }
    }

    /// Solid axis-aligned rectangle, used for bitmap glyph cells
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            let mut paint = color.paint();
            paint.anti_alias = false;
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn fill(&mut self, path: &Path, color: Color) {
        self.pixmap
            .fill_path(path, &color.paint(), FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &Path, color: Color, width: f32) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &color.paint(), &stroke, Transform::identity(), None);
    }

    /// Straight-alpha copy for PNG encoding
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }

    /// Opaque copy composited over white, for formats without alpha
    pub fn to_rgb_on_white(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            // Premultiplied source over white: c + 255 * (1 - a)
            let cover = 255 - src.alpha();
            *dst = Rgb([
                src.red().saturating_add(cover),
                src.green().saturating_add(cover),
                src.blue().saturating_add(cover),
            ]);
        }
        img
    }
}

fn polyline_path(points: &[(f32, f32)], close: bool) -> Option<Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb([255, 0, 0]);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(8, 8).unwrap();
        let img = canvas.to_rgba_image();
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_flatten_transparent_is_white() {
        let canvas = Canvas::new(4, 4).unwrap();
        let img = canvas.to_rgb_on_white();
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_filled_ellipse_covers_center_not_corner() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.ellipse(BoundingBox::inset(40, 2.0), Some(RED), None);
        let img = canvas.to_rgba_image();
        assert_eq!(img.get_pixel(20, 20).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_outline_stays_inside_box() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        canvas.ellipse(BoundingBox::inset(40, 10.0), None, Some((RED, 4.0)));
        let img = canvas.to_rgba_image();
        // Left edge of the box on the middle row is covered by the ring
        assert!(img.get_pixel(11, 20).0[3] > 200);
        // Just outside the box stays clear
        assert_eq!(img.get_pixel(8, 20).0[3], 0);
        // Centre stays clear
        assert_eq!(img.get_pixel(20, 20).0[3], 0);
    }

    #[test]
    fn test_rect_fills_exact_cells() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.rect(2.0, 3.0, 2.0, 2.0, RED);
        let img = canvas.to_rgba_image();
        assert_eq!(img.get_pixel(2, 3).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(4, 4).0[3], 0);
    }

    #[test]
    fn test_flatten_opaque_keeps_color() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.rect(0.0, 0.0, 10.0, 10.0, RED);
        let img = canvas.to_rgb_on_white();
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0]);
    }

    #[test]
    fn test_union_covers_both_boxes() {
        let a = BoundingBox::new(0.0, 5.0, 10.0, 8.0);
        let b = BoundingBox::new(4.0, 2.0, 6.0, 12.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, 2.0, 10.0, 12.0));
        assert_eq!(a.union(&b).center(), (5.0, 7.0));
    }
}
