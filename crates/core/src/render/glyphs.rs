//! Built-in 5x7 bitmap font for the style label.
//!
//! The label step only ever draws the upper-cased style names, so a
//! 26-letter table is enough. Each glyph is seven rows of five bits,
//! most significant bit on the left.

use crate::render::canvas::{Canvas, Rgba};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

#[rustfmt::skip]
const FONT: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    if c.is_ascii_uppercase() {
        FONT.get((c as usize) - ('A' as usize))
    } else {
        None
    }
}

/// Pixel width of `text` at the given scale, including inter-glyph gaps.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * GLYPH_WIDTH * scale + (n - 1) * scale
}

/// Draw `text` horizontally centered on `center_x`, top edge at `top_y`.
///
/// Characters without a glyph (anything outside A-Z) advance the cursor
/// but draw nothing, which renders spaces as gaps.
pub fn draw_text(canvas: &mut Canvas, text: &str, center_x: i64, top_y: i64, scale: u32, color: Rgba) {
    let mut x = center_x - i64::from(text_width(text, scale)) / 2;
    let advance = i64::from((GLYPH_WIDTH + 1) * scale);

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        canvas.fill_rect(
                            x + i64::from(col * scale),
                            top_y + (row as i64) * i64::from(scale),
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        x += advance;
    }
}

/// Pixel height of a line of text at the given scale.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_counts_gaps() {
        // Three glyphs of 5 px plus two 1 px gaps at scale 1.
        assert_eq!(text_width("ABC", 1), 17);
        assert_eq!(text_width("ABC", 2), 34);
        assert_eq!(text_width("", 2), 0);
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let mut canvas = Canvas::new(40, 20);
        draw_text(&mut canvas, "I", 20, 5, 1, Rgba::opaque(255, 255, 255));

        let mut lit = 0;
        for y in 0..20 {
            for x in 0..40 {
                if canvas.pixel(x, y).a != 0 {
                    lit += 1;
                }
            }
        }
        // I = two 3-px bars plus five 1-px stem rows.
        assert_eq!(lit, 11);
    }

    #[test]
    fn test_non_letters_draw_nothing() {
        let mut canvas = Canvas::new(40, 20);
        draw_text(&mut canvas, "1 2", 20, 5, 1, Rgba::opaque(255, 255, 255));

        for y in 0..20 {
            for x in 0..40 {
                assert_eq!(canvas.pixel(x, y).a, 0);
            }
        }
    }

    #[test]
    fn test_all_style_names_have_glyphs() {
        for name in ["CYBERPUNK", "ABSTRACT", "NATURE", "GEOMETRIC", "WATERCOLOR"] {
            for c in name.chars() {
                assert!(glyph(c).is_some(), "missing glyph for {c}");
            }
        }
    }
}
