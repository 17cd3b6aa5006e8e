//! Minimal 5×7 bitmap font used when no scalable font can be loaded.
//!
//! Covers the digits and the arithmetic symbols drawn on the icon. Each row is
//! five bits wide, most significant bit on the left.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs, in font cells
pub const GLYPH_SPACING: u32 = 1;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const UNKNOWN: Glyph = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

fn glyph(c: char) -> Glyph {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '×' => [0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b00000],
        '÷' => [0b00000, 0b00100, 0b00000, 0b11111, 0b00000, 0b00100, 0b00000],
        ' ' => [0; GLYPH_HEIGHT as usize],
        _ => UNKNOWN,
    }
}

/// Cell size in pixels for a requested font size
pub fn scale_for(font_px: f32) -> u32 {
    ((font_px / 12.0).round() as u32).max(1)
}

/// Lit cells of `text` as `(column, row)` pairs in font-cell units
pub fn cells(text: &str) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for (index, c) in text.chars().enumerate() {
        let origin = index as u32 * (GLYPH_WIDTH + GLYPH_SPACING);
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    out.push((origin + col, row as u32));
                }
            }
        }
    }
    out
}

/// Ink extent of `cells` as `(min_col, min_row, max_col + 1, max_row + 1)`
pub fn ink_extent(cells: &[(u32, u32)]) -> Option<(u32, u32, u32, u32)> {
    let first = cells.first()?;
    let mut extent = (first.0, first.1, first.0 + 1, first.1 + 1);
    for &(col, row) in cells {
        extent.0 = extent.0.min(col);
        extent.1 = extent.1.min(row);
        extent.2 = extent.2.max(col + 1);
        extent.3 = extent.3.max(row + 1);
    }
    Some(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minus_is_single_row() {
        let cells = cells("-");
        assert_eq!(cells.len(), 5);
        assert_eq!(ink_extent(&cells), Some((0, 3, 5, 4)));
    }

    #[test]
    fn test_second_glyph_is_offset() {
        let cells = cells("--");
        assert_eq!(ink_extent(&cells), Some((0, 3, 11, 4)));
    }

    #[test]
    fn test_plus_ink_is_narrower_than_cell() {
        let extent = ink_extent(&cells("+")).unwrap();
        assert_eq!(extent, (0, 1, 5, 6));
    }

    #[test]
    fn test_every_icon_glyph_is_known() {
        for c in "2+3=5-×÷".chars() {
            assert_ne!(glyph(c), UNKNOWN, "missing glyph for {}", c);
        }
    }

    #[test]
    fn test_blank_text_has_no_ink() {
        assert_eq!(ink_extent(&cells("  ")), None);
    }

    #[test]
    fn test_scale_never_zero() {
        assert_eq!(scale_for(1.0), 1);
        assert_eq!(scale_for(60.0), 5);
        assert_eq!(scale_for(80.0), 7);
    }
}
