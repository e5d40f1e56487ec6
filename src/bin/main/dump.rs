use cjk_glyph_core::glyph_table::GLYPH_HEIGHT;
use cjk_glyph_surface::Tft240x240;
use embedded_graphics_core::pixelcolor::Rgb565;

/// Prints one rendered line of the framebuffer as block art.
pub fn print_line(frame: &Tft240x240, top: i32, width: i32, background: Rgb565) {
    let width = width.clamp(0, Tft240x240::WIDTH as i32);

    for y in top..top + GLYPH_HEIGHT as i32 {
        let row: String = (0..width)
            .map(|x| match frame.color(x, y) {
                Some(color) if color != background => '█',
                _ => ' ',
            })
            .collect();
        println!("{}", row.trim_end());
    }
}
