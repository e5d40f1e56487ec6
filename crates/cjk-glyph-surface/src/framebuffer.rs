//! In-memory RGB565 framebuffer.

use core::convert::Infallible;

use cjk_glyph_core::surface::{DisplaySurface, colors};

use crate::ascii_font;

/// Row-major RGB565 framebuffer of `W` x `H` pixels.
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[u16; W]; H],
}

/// 240x240 panel (ST7789 class).
pub type Tft240x240 = FrameBuffer<240, 240>;
/// 320x240 panel (ILI9341 class, landscape).
pub type Tft320x240 = FrameBuffer<320, 240>;

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    /// Creates a black framebuffer.
    pub const fn new() -> Self {
        Self {
            pixels: [[colors::BLACK; W]; H],
        }
    }

    pub fn clear(&mut self, color: u16) {
        for row in self.pixels.iter_mut() {
            row.fill(color);
        }
    }

    /// Sets a pixel.
    ///
    /// Returns `true` when the pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u16) -> bool {
        let Some((x, y)) = Self::index(x, y) else {
            return false;
        };

        self.pixels[y][x] = color;
        true
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u16> {
        let (x, y) = Self::index(x, y)?;
        Some(self.pixels[y][x])
    }

    pub fn row(&self, y: usize) -> Option<&[u16; W]> {
        self.pixels.get(y)
    }

    /// Counts pixels in the rectangle that differ from `background`.
    pub fn ink_in(&self, x: i32, y: i32, w: usize, h: usize, background: u16) -> usize {
        let mut count = 0usize;
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                if self
                    .pixel(x + dx, y + dy)
                    .is_some_and(|color| color != background)
                {
                    count += 1;
                }
            }
        }
        count
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < W && y < H).then_some((x, y))
    }
}

impl<const W: usize, const H: usize> DisplaySurface for FrameBuffer<W, H> {
    type Color = u16;
    type Error = Infallible;

    /// Out-of-bounds pixels are clipped silently.
    fn draw_pixel(&mut self, x: i32, y: i32, color: u16) -> Result<(), Self::Error> {
        let _ = self.set_pixel(x, y, color);
        Ok(())
    }

    fn draw_ascii(&mut self, x: i32, y: i32, ch: u8, fg: u16, bg: u16) -> Result<(), Self::Error> {
        for (dx, dy, on) in ascii_font::cell_pixels(ch) {
            let _ = self.set_pixel(x + dx, y + dy, if on { fg } else { bg });
        }
        Ok(())
    }
}
