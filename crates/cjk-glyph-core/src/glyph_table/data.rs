// Hand-traced 16x16 Song-style bitmaps for the panel's label characters.
// Layout: 16 rows, 2 bytes per row, MSB first (left to right).

use super::GlyphEntry;

pub(super) const GLYPHS: [GlyphEntry; super::GLYPH_COUNT] = [
    GlyphEntry::new(
        "系",
        [
            0x00, 0x0E, 0x1F, 0xF0, 0x01, 0x80, 0x02, 0x10,
            0x04, 0x20, 0x0F, 0xE0, 0x00, 0x44, 0x00, 0x82,
            0x1F, 0xFE, 0x00, 0xA0, 0x08, 0x88, 0x10, 0x84,
            0x20, 0x82, 0x00, 0x80, 0x01, 0x80, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "统",
        [
            0x08, 0x20, 0x10, 0x10, 0x13, 0xFE, 0x24, 0x20,
            0x7C, 0x48, 0x08, 0x84, 0x11, 0xFE, 0x3E, 0x48,
            0x00, 0x48, 0x06, 0x48, 0x70, 0x48, 0x00, 0x49,
            0x00, 0x89, 0x01, 0x07, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "设",
        [
            0x40, 0x7C, 0x20, 0x44, 0x20, 0x44, 0x00, 0x44,
            0x00, 0x87, 0xF1, 0x00, 0x11, 0xFC, 0x10, 0x84,
            0x10, 0x48, 0x10, 0x30, 0x14, 0x48, 0x18, 0x84,
            0x13, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "备",
        [
            0x04, 0x00, 0x0F, 0xE0, 0x10, 0x20, 0x28, 0x40,
            0x03, 0x80, 0x0C, 0x60, 0x30, 0x1C, 0xFF, 0xFC,
            0x21, 0x08, 0x21, 0x08, 0x3F, 0xF0, 0x21, 0x08,
            0x21, 0x08, 0x3F, 0xF0, 0x20, 0x08, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "内",
        [
            0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x7F, 0xFC,
            0x41, 0x04, 0x41, 0x04, 0x42, 0x84, 0x44, 0x44,
            0x48, 0x24, 0x50, 0x14, 0x60, 0x0C, 0x40, 0x04,
            0x40, 0x04, 0x40, 0x14, 0x40, 0x0C, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "存",
        [
            0x01, 0x00, 0x02, 0x00, 0xFF, 0xFE, 0x04, 0x00,
            0x09, 0xFC, 0x10, 0x10, 0x30, 0x20, 0x50, 0x40,
            0x13, 0xFF, 0x10, 0x40, 0x10, 0x40, 0x10, 0x40,
            0x10, 0x40, 0x11, 0x40, 0x10, 0xC0, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "磁",
        [
            0x00, 0x42, 0xF8, 0x24, 0x21, 0xFF, 0x20, 0x82,
            0x41, 0x04, 0x7A, 0x49, 0xCF, 0xEF, 0xA8, 0x82,
            0x29, 0x04, 0x2A, 0xAA, 0x2F, 0xF7, 0x3C, 0x01,
            0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "盘",
        [
            0x02, 0x00, 0x04, 0x00, 0x1F, 0xF0, 0x11, 0x10,
            0x10, 0x90, 0x7F, 0xF8, 0x10, 0x10, 0x10, 0x30,
            0x20, 0x00, 0x3F, 0xFC, 0x24, 0x88, 0x24, 0x88,
            0x24, 0x88, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "上",
        [
            0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00,
            0x01, 0xFC, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00,
            0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00,
            0x01, 0x00, 0xFF, 0xFE, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "行",
        [
            0x08, 0x00, 0x11, 0xFC, 0x20, 0x00, 0x48, 0x00,
            0x10, 0x00, 0x33, 0xFE, 0x50, 0x04, 0x10, 0x04,
            0x10, 0x04, 0x10, 0x04, 0x10, 0x04, 0x10, 0x04,
            0x10, 0x04, 0x10, 0x14, 0x10, 0x0C, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "下",
        [
            0xFF, 0xFE, 0x01, 0x00, 0x01, 0x00, 0x01, 0x80,
            0x01, 0x40, 0x01, 0x20, 0x01, 0x10, 0x01, 0x08,
            0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00,
            0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "：",
        [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "服",
        [
            0x7C, 0xFE, 0x44, 0x82, 0x44, 0x82, 0x7C, 0x8E,
            0x44, 0x80, 0x44, 0xFE, 0x7C, 0xC2, 0x44, 0xA4,
            0x44, 0x98, 0x44, 0x98, 0x84, 0xA4, 0x8C, 0xC3,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "务",
        [
            0x04, 0x00, 0x0F, 0xE0, 0x10, 0x40, 0x28, 0x80,
            0x07, 0x00, 0x18, 0xC0, 0x61, 0x38, 0x02, 0x00,
            0x3F, 0xF8, 0x02, 0x08, 0x04, 0x08, 0x08, 0x08,
            0x10, 0x08, 0x20, 0x50, 0x40, 0x20, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "器",
        [
            0x7C, 0x7C, 0x44, 0x44, 0x7C, 0x7C, 0x00, 0x50,
            0xFF, 0xFC, 0x01, 0x20, 0x06, 0x08, 0x70, 0x0E,
            0x7C, 0x7C, 0x44, 0x44, 0x44, 0x44, 0x7C, 0x7C,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "树",
        [
            0x20, 0x04, 0x20, 0x04, 0xFB, 0xE4, 0x20, 0x5F,
            0x74, 0x84, 0x73, 0x04, 0xAB, 0x44, 0x21, 0x24,
            0x22, 0x84, 0x24, 0x44, 0x28, 0x04, 0x20, 0x0C,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "莓",
        [
            0x08, 0x20, 0xFF, 0xFE, 0x08, 0x20, 0x10, 0x00,
            0x3F, 0xF8, 0x40, 0x00, 0x3F, 0xF0, 0x22, 0x10,
            0xFF, 0xFE, 0x20, 0x90, 0x3F, 0xF0, 0x00, 0x10,
            0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "派",
        [
            0x40, 0x1C, 0x27, 0xE0, 0x04, 0x00, 0x85, 0x0C,
            0x44, 0x90, 0x04, 0xA0, 0x14, 0xC0, 0x14, 0xA0,
            0x24, 0x90, 0x28, 0x88, 0x48, 0x86, 0x50, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "腾",
        [
            0x78, 0x84, 0x48, 0x48, 0x4B, 0xFE, 0x78, 0x48,
            0x4B, 0xFF, 0x48, 0x84, 0x79, 0x23, 0x4A, 0x7F,
            0x48, 0x22, 0x48, 0x5A, 0x88, 0x8E, 0x98, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    GlyphEntry::new(
        "讯",
        [
            0x43, 0xF8, 0x20, 0x88, 0x20, 0x88, 0x00, 0x88,
            0xF7, 0xF0, 0x10, 0x88, 0x10, 0x88, 0x10, 0x88,
            0x14, 0x89, 0x18, 0x85, 0x10, 0x83, 0x00, 0x40,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
];
