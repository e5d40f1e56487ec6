//! Display surface abstraction consumed by the renderer.

use core::fmt::Debug;

/// Pixel-addressable target with a built-in fixed-size ASCII font.
///
/// Bring-up of the underlying panel (bus, pins, init sequence) belongs to the
/// caller; the renderer only ever calls these two primitives.
pub trait DisplaySurface {
    type Color: Copy;
    type Error: Debug;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error>;

    /// Draws one ASCII byte with its top-left corner at `(x, y)`.
    fn draw_ascii(
        &mut self,
        x: i32,
        y: i32,
        ch: u8,
        fg: Self::Color,
        bg: Self::Color,
    ) -> Result<(), Self::Error>;
}

impl<S> DisplaySurface for &mut S
where
    S: DisplaySurface + ?Sized,
{
    type Color = S::Color;
    type Error = S::Error;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error> {
        (**self).draw_pixel(x, y, color)
    }

    fn draw_ascii(
        &mut self,
        x: i32,
        y: i32,
        ch: u8,
        fg: Self::Color,
        bg: Self::Color,
    ) -> Result<(), Self::Error> {
        (**self).draw_ascii(x, y, ch, fg, bg)
    }
}

/// Default text colors for a color type.
pub trait ThemeColor: Copy {
    /// White or its equivalent.
    const FOREGROUND: Self;
    /// Black or its equivalent.
    const BACKGROUND: Self;
}

/// Raw RGB565, as SPI TFT drivers take it.
impl ThemeColor for u16 {
    const FOREGROUND: Self = colors::WHITE;
    const BACKGROUND: Self = colors::BLACK;
}

impl ThemeColor for bool {
    const FOREGROUND: Self = true;
    const BACKGROUND: Self = false;
}

/// Common RGB565 values.
pub mod colors {
    pub const BLACK: u16 = 0x0000;
    pub const WHITE: u16 = 0xFFFF;
    pub const RED: u16 = 0xF800;
    pub const BLUE: u16 = 0x001F;
    pub const YELLOW: u16 = 0xFFE0;
    pub const CYAN: u16 = 0x07FF;
}

#[cfg(feature = "embedded-graphics")]
mod graphics {
    use embedded_graphics_core::pixelcolor::{BinaryColor, Rgb565, Rgb888, RgbColor};

    use super::ThemeColor;

    impl ThemeColor for Rgb565 {
        const FOREGROUND: Self = Rgb565::WHITE;
        const BACKGROUND: Self = Rgb565::BLACK;
    }

    impl ThemeColor for Rgb888 {
        const FOREGROUND: Self = Rgb888::WHITE;
        const BACKGROUND: Self = Rgb888::BLACK;
    }

    impl ThemeColor for BinaryColor {
        const FOREGROUND: Self = BinaryColor::On;
        const BACKGROUND: Self = BinaryColor::Off;
    }
}
