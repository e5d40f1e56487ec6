//! 20x20 RGB565 platform badges drawn after a status line.

use cjk_glyph_core::surface::colors;
use cjk_glyph_surface::Tft240x240;

pub const ICON_W: usize = 20;
pub const ICON_H: usize = 20;
const ICON_PIXELS: usize = ICON_W * ICON_H;

/// Gap between the end of the text and the badge.
pub const ICON_GAP: i32 = 4;
/// Badges are taller than glyphs; raise them to center on the line.
pub const ICON_RISE: i32 = 2;

/// Pixels with this value are left untouched.
const TRANSPARENT: u16 = colors::BLACK;

pub type Icon = [u16; ICON_PIXELS];

/// Packs 8-bit channels into RGB565.
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

const DEBIAN_RED: u16 = rgb565(0xD7, 0x0A, 0x53);
const CENTOS_ORANGE: u16 = rgb565(0xEF, 0xA7, 0x24);
const CENTOS_GREEN: u16 = rgb565(0x9C, 0xCD, 0x2A);
const CENTOS_PURPLE: u16 = rgb565(0x93, 0x2D, 0x79);
const CENTOS_BLUE: u16 = rgb565(0x26, 0x2A, 0x77);
const LEAF_GREEN: u16 = rgb565(0x6C, 0xC0, 0x4A);

/// Squared distance from the icon center, in half pixels.
const fn dist2(x: usize, y: usize) -> i32 {
    let dx = 2 * x as i32 - (ICON_W as i32 - 1);
    let dy = 2 * y as i32 - (ICON_H as i32 - 1);
    dx * dx + dy * dy
}

/// Open ring, gap on the lower right.
const fn debian() -> Icon {
    let mut icon = [TRANSPARENT; ICON_PIXELS];
    let mut y = 0;
    while y < ICON_H {
        let mut x = 0;
        while x < ICON_W {
            let d = dist2(x, y);
            let gap = x >= ICON_W / 2 && y >= ICON_H / 2 && x + 2 > y;
            if d >= 10 * 10 && d <= 18 * 18 && !gap {
                icon[y * ICON_W + x] = DEBIAN_RED;
            }
            x += 1;
        }
        y += 1;
    }
    icon
}

/// Four colored quadrants split by a white cross.
const fn centos() -> Icon {
    let mut icon = [TRANSPARENT; ICON_PIXELS];
    let mut y = 1;
    while y < ICON_H - 1 {
        let mut x = 1;
        while x < ICON_W - 1 {
            let left = x < ICON_W / 2;
            let top = y < ICON_H / 2;
            icon[y * ICON_W + x] = if x == ICON_W / 2 || y == ICON_H / 2 {
                colors::WHITE
            } else if left && top {
                CENTOS_ORANGE
            } else if top {
                CENTOS_GREEN
            } else if left {
                CENTOS_BLUE
            } else {
                CENTOS_PURPLE
            };
            x += 1;
        }
        y += 1;
    }
    icon
}

/// Red berry under a pair of leaves.
const fn raspi() -> Icon {
    let mut icon = [TRANSPARENT; ICON_PIXELS];
    let mut y = 0;
    while y < ICON_H {
        let mut x = 0;
        while x < ICON_W {
            let dx = 2 * x as i32 - (ICON_W as i32 - 1);
            let dy = 2 * y as i32 - 25;
            if y < 6 && (x as i32 - 10).abs() <= 6 - y as i32 && x != 9 && x != 10 {
                icon[y * ICON_W + x] = LEAF_GREEN;
            } else if y >= 5 && dx * dx + dy * dy <= 14 * 14 {
                icon[y * ICON_W + x] = colors::RED;
            }
            x += 1;
        }
        y += 1;
    }
    icon
}

pub static DEBIAN_ICON: Icon = debian();
pub static CENTOS_ICON: Icon = centos();
pub static RASPI_ICON: Icon = raspi();

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Debian,
    CentOs,
    Raspi,
}

impl Platform {
    /// Picks a platform from a status value such as `"Debian 12"`.
    pub fn detect(value: &str) -> Option<Self> {
        let lower = value.to_ascii_lowercase();
        let raspi = ["树莓派", "raspbian", "raspberry"];
        if raspi.iter().any(|name| lower.contains(name)) {
            Some(Self::Raspi)
        } else if lower.contains("debian") {
            Some(Self::Debian)
        } else if lower.contains("centos") {
            Some(Self::CentOs)
        } else {
            None
        }
    }

    pub fn icon(self) -> &'static Icon {
        match self {
            Self::Debian => &DEBIAN_ICON,
            Self::CentOs => &CENTOS_ICON,
            Self::Raspi => &RASPI_ICON,
        }
    }
}

/// Copies `icon` with its top-left corner at `(x, y)`, clipping at the frame
/// edges. Returns the number of pixels written.
pub fn blit(frame: &mut Tft240x240, icon: &Icon, x: i32, y: i32) -> usize {
    let mut written = 0;
    for (row, pixels) in icon.chunks_exact(ICON_W).enumerate() {
        for (col, &pixel) in pixels.iter().enumerate() {
            if pixel == TRANSPARENT {
                continue;
            }
            if frame.set_pixel(x + col as i32, y + row as i32, pixel) {
                written += 1;
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(icon: &Icon) -> usize {
        icon.iter().filter(|p| **p != TRANSPARENT).count()
    }

    #[test]
    fn rgb565_packs_channels() {
        assert_eq!(rgb565(0xFF, 0x00, 0x00), colors::RED);
        assert_eq!(rgb565(0xFF, 0xFF, 0xFF), colors::WHITE);
        assert_eq!(rgb565(0x00, 0x00, 0xFF), colors::BLUE);
        assert_eq!(rgb565(0x07, 0x03, 0x07), 0);
    }

    #[test]
    fn detects_platform_from_value() {
        assert_eq!(Platform::detect("树莓派 4B"), Some(Platform::Raspi));
        assert_eq!(Platform::detect("Debian 12"), Some(Platform::Debian));
        assert_eq!(Platform::detect("CentOS 7"), Some(Platform::CentOs));
        assert_eq!(Platform::detect("Raspbian"), Some(Platform::Raspi));
        assert_eq!(Platform::detect("42.5%"), None);
    }

    #[test]
    fn every_icon_has_ink() {
        for icon in [&DEBIAN_ICON, &CENTOS_ICON, &RASPI_ICON] {
            let count = opaque(icon);
            assert!(count > 0 && count < ICON_PIXELS);
        }
        assert_eq!(RASPI_ICON[12 * ICON_W + 10], colors::RED);
        assert_eq!(CENTOS_ICON[ICON_W / 2 * ICON_W + 3], colors::WHITE);
    }

    #[test]
    fn blit_writes_opaque_pixels_at_offset() {
        let mut frame = Tft240x240::new();
        let written = blit(&mut frame, &RASPI_ICON, 100, 50);

        assert_eq!(written, opaque(&RASPI_ICON));
        assert_eq!(frame.pixel(110, 62), Some(colors::RED));
        assert_eq!(frame.pixel(100, 50), Some(colors::BLACK));
    }

    #[test]
    fn blit_clips_at_frame_edges() {
        let mut frame = Tft240x240::new();
        let inside = blit(&mut frame, &CENTOS_ICON, 230, -10);

        assert!(inside > 0);
        assert!(inside < opaque(&CENTOS_ICON));
        // Only the lower-left quadrant lands in the frame.
        assert_eq!(frame.pixel(232, 2), Some(CENTOS_BLUE));
    }
}
