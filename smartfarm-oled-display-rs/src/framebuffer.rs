//! In-memory mirror of the SSD1306 GDDRAM.
//!
//! The panel's memory is 8 horizontal pages of 8 pixel rows. Each byte holds
//! one column of one page, LSB at the top:
//!
//! ```text
//!            x = 0     x = 1           x = 127
//! page 0   [byte 0]  [byte 1]  ...   [byte 127]    rows 0..=7
//! page 1   [byte 128][byte 129]...   [byte 255]    rows 8..=15
//!   ...
//! page 7   [byte 896]   ...          [byte 1023]   rows 56..=63
//! ```
//!
//! So pixel `(x, y)` is bit `y % 8` of byte `x + (y / 8) * WIDTH`. With
//! horizontal addressing mode the controller consumes the buffer in exactly
//! this order, which lets [`update()`](crate::OledDriver::update) push
//! [`Framebuffer::as_bytes()`] unchanged.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// Panel width in pixels.
pub const WIDTH: usize = 128;

/// Panel height in pixels.
pub const HEIGHT: usize = 64;

/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;

/// Buffer length in bytes (1 bit per pixel).
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// 1-bit-per-pixel frame buffer in panel page layout.
///
/// Coordinates are signed so that drawing code can run off any edge; pixels
/// outside the panel are dropped without error.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.buffer.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("Framebuffer").field("lit_pixels", &lit).finish()
    }
}

impl Framebuffer {
    /// Blank (all pixels off) buffer.
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_SIZE],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Byte offset and bit mask for an on-panel pixel.
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x + (y / 8) * WIDTH, 1 << (y % 8)))
    }

    /// Set (`on = true`) or clear a single pixel. Off-panel coordinates are
    /// a no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((offset, mask)) = Self::locate(x, y) {
            if on {
                self.buffer[offset] |= mask;
            } else {
                self.buffer[offset] &= !mask;
            }
        }
    }

    /// Read back a pixel. Off-panel coordinates read as off.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        Self::locate(x, y)
            .map(|(offset, mask)| self.buffer[offset] & mask != 0)
            .unwrap_or(false)
    }

    /// Raw page-major bytes, ready for a data frame.
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.buffer
    }
}

// ── embedded-graphics integration ────────────────────────────────────────

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
