//! Text rasterizer for the 5×7 font.
//!
//! Only set bits are written: the cell background is left as it was, so
//! clear the area (or the whole buffer) first when overdrawing.

use crate::font::{glyph, CHAR_ADVANCE, GLYPH_HEIGHT};
use crate::framebuffer::Framebuffer;

/// Draw one character with its top-left corner at `(x, y)`.
///
/// Characters without a glyph draw nothing. Pixels falling off the panel
/// are clipped by [`Framebuffer::set_pixel`]; coordinates saturate rather
/// than wrap, so an origin near `i32::MAX` lands off-panel.
pub fn draw_char(fb: &mut Framebuffer, x: i32, y: i32, c: char) {
    let Some(bitmap) = glyph(c) else {
        return;
    };

    for (i, &column) in bitmap.iter().enumerate() {
        for j in 0..GLYPH_HEIGHT {
            if column & (1 << j) != 0 {
                fb.set_pixel(x.saturating_add(i as i32), y.saturating_add(j as i32), true);
            }
        }
    }
}

/// Draw `text` left to right on one line, advancing [`CHAR_ADVANCE`] columns
/// per character. No wrapping; anything past the right edge is clipped.
///
/// Every character advances the cursor, including ones without a glyph.
pub fn draw_string(fb: &mut Framebuffer, x: i32, y: i32, text: &str) {
    let mut cursor_x = x;
    for c in text.chars() {
        draw_char(fb, cursor_x, y, c);
        cursor_x = cursor_x.saturating_add(CHAR_ADVANCE);
    }
}
