use core::{convert::Infallible, fmt::Debug, iter};

use cjk_glyph_core::surface::DisplaySurface;
use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{IntoStorage, Rgb565, raw::RawU16},
};

use crate::{FrameBuffer, ascii_font};

/// Adapts any `embedded-graphics` draw target into a [`DisplaySurface`].
///
/// ASCII is drawn with the 5x7 fallback font.
#[derive(Debug)]
pub struct DrawTargetSurface<D> {
    target: D,
}

impl<D> DrawTargetSurface<D> {
    pub const fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplaySurface for DrawTargetSurface<D>
where
    D: DrawTarget,
    D::Error: Debug,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error> {
        self.target
            .draw_iter(iter::once(Pixel(Point::new(x, y), color)))
    }

    fn draw_ascii(
        &mut self,
        x: i32,
        y: i32,
        ch: u8,
        fg: Self::Color,
        bg: Self::Color,
    ) -> Result<(), Self::Error> {
        let pixels = ascii_font::cell_pixels(ch)
            .map(|(dx, dy, on)| Pixel(Point::new(x + dx, y + dy), if on { fg } else { bg }));
        self.target.draw_iter(pixels)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let _ = self.set_pixel(point.x, point.y, color.into_storage());
        }

        Ok(())
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Reads a pixel as an `embedded-graphics` color.
    pub fn color(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.pixel(x, y).map(|raw| Rgb565::from(RawU16::new(raw)))
    }
}
