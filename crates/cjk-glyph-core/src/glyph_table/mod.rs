//! Fixed 16x16 CJK glyph table keyed by the character's UTF-8 bytes.
//!
//! The table is one ordered list of `(key, bitmap)` records. Position in the
//! list is the glyph's identity at runtime; keys are only used to find it.

use core::{slice, str};

mod data;

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 16;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 16;
/// Bytes per bitmap row.
pub const GLYPH_ROW_BYTES: usize = GLYPH_WIDTH / 8;
/// Bytes per bitmap.
pub const GLYPH_BITMAP_BYTES: usize = GLYPH_ROW_BYTES * GLYPH_HEIGHT;
/// Length of a glyph key (one 3-byte UTF-8 code point).
pub const GLYPH_KEY_BYTES: usize = 3;
/// Number of entries in the builtin table.
pub const GLYPH_COUNT: usize = 20;

pub type GlyphKey = [u8; GLYPH_KEY_BYTES];

/// 16 rows of 2 bytes. Bit 7 of the first byte in a row is column 0.
pub type GlyphBitmap = [u8; GLYPH_BITMAP_BYTES];

/// Position of an entry inside a [`GlyphTable`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GlyphIndex(usize);

impl GlyphIndex {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphEntry {
    pub key: GlyphKey,
    pub bitmap: GlyphBitmap,
}

impl GlyphEntry {
    /// Builds an entry from a one-character literal.
    ///
    /// Panics (at compile time in const context) unless `ch` is exactly one
    /// 3-byte UTF-8 sequence.
    pub const fn new(ch: &str, bitmap: GlyphBitmap) -> Self {
        let bytes = ch.as_bytes();
        assert!(
            bytes.len() == GLYPH_KEY_BYTES,
            "glyph key must be one 3-byte UTF-8 character"
        );
        assert!(
            is_key_lead(bytes[0]),
            "glyph key must start with a 3-byte lead"
        );

        Self {
            key: [bytes[0], bytes[1], bytes[2]],
            bitmap,
        }
    }

    /// The key as text, for logs and tooling.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.key).unwrap_or("?")
    }

    pub fn pixel(&self, col: usize, row: usize) -> bool {
        glyph_pixel(&self.bitmap, col, row)
    }
}

/// Returns `true` for a lead byte of the form `1110_xxxx`.
#[inline]
pub const fn is_key_lead(byte: u8) -> bool {
    byte & 0xF0 == 0xE0
}

/// Reads one packed bitmap row as a 16-bit value, column 0 in bit 15.
#[inline]
pub fn glyph_row(bitmap: &GlyphBitmap, row: usize) -> u16 {
    if row >= GLYPH_HEIGHT {
        return 0;
    }

    let start = row * GLYPH_ROW_BYTES;
    u16::from_be_bytes([bitmap[start], bitmap[start + 1]])
}

/// Reads one pixel. Out-of-range coordinates read as unset.
#[inline]
pub fn glyph_pixel(bitmap: &GlyphBitmap, col: usize, row: usize) -> bool {
    if col >= GLYPH_WIDTH {
        return false;
    }

    glyph_row(bitmap, row) & (0x8000 >> col) != 0
}

const fn keys_equal(a: &GlyphKey, b: &GlyphKey) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
}

/// Checks that no two entries share a key.
pub const fn keys_unique(entries: &[GlyphEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if keys_equal(&entries[i].key, &entries[j].key) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }

    true
}

const _: () = assert!(
    keys_unique(&data::GLYPHS),
    "builtin glyph table has duplicate keys"
);

/// Builtin glyphs, kept in read-only memory.
pub static BUILTIN_GLYPHS: [GlyphEntry; GLYPH_COUNT] = data::GLYPHS;

static BUILTIN_TABLE: GlyphTable = GlyphTable::new(&BUILTIN_GLYPHS);

/// Read-only view over an ordered glyph list.
#[derive(Clone, Copy, Debug)]
pub struct GlyphTable {
    entries: &'static [GlyphEntry],
}

impl GlyphTable {
    /// Wraps a custom list. Keys are not checked here; a duplicate key is
    /// shadowed by the earlier entry.
    pub const fn new(entries: &'static [GlyphEntry]) -> Self {
        Self { entries }
    }

    /// The 20-glyph table used by default.
    pub fn builtin() -> &'static GlyphTable {
        &BUILTIN_TABLE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'static [GlyphEntry] {
        self.entries
    }

    pub fn iter(&self) -> slice::Iter<'static, GlyphEntry> {
        self.entries.iter()
    }

    /// Finds the first entry whose key equals `candidate` byte for byte.
    pub fn lookup(&self, candidate: &[u8]) -> Option<GlyphIndex> {
        if candidate.len() != GLYPH_KEY_BYTES {
            return None;
        }

        self.entries
            .iter()
            .position(|entry| entry.key[..] == *candidate)
            .map(GlyphIndex)
    }

    pub fn lookup_char(&self, ch: char) -> Option<GlyphIndex> {
        let mut utf8 = [0u8; 4];
        self.lookup(ch.encode_utf8(&mut utf8).as_bytes())
    }

    pub fn entry(&self, index: GlyphIndex) -> Option<&'static GlyphEntry> {
        self.entries.get(index.0)
    }

    pub fn bitmap(&self, index: GlyphIndex) -> Option<&'static GlyphBitmap> {
        self.entry(index).map(|entry| &entry.bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL_CHARS: &str = "系统设备内存磁盘上行下：服务器树莓派腾讯";

    static DUPLICATED: [GlyphEntry; 2] = [
        GlyphEntry::new("上", [0x11; GLYPH_BITMAP_BYTES]),
        GlyphEntry::new("上", [0x22; GLYPH_BITMAP_BYTES]),
    ];

    #[test]
    fn builtin_order_matches_panel_label_string() {
        let table = GlyphTable::builtin();
        assert_eq!(table.len(), GLYPH_COUNT);
        assert_eq!(PANEL_CHARS.chars().count(), GLYPH_COUNT);

        for (i, ch) in PANEL_CHARS.chars().enumerate() {
            assert_eq!(table.lookup_char(ch), Some(GlyphIndex::new(i)), "{ch}");
            assert_eq!(table.entries()[i].as_str().chars().next(), Some(ch));
        }
    }

    #[test]
    fn builtin_keys_are_unique_and_three_byte() {
        assert!(keys_unique(GlyphTable::builtin().entries()));
        for entry in GlyphTable::builtin().iter() {
            assert!(is_key_lead(entry.key[0]));
            assert_eq!(entry.as_str().len(), GLYPH_KEY_BYTES);
        }
    }

    #[test]
    fn every_builtin_bitmap_has_ink() {
        for entry in GlyphTable::builtin().iter() {
            assert!(entry.bitmap.iter().any(|b| *b != 0), "{}", entry.as_str());
        }
    }

    #[test]
    fn lookup_requires_exact_three_bytes() {
        let table = GlyphTable::builtin();
        let key = "上".as_bytes();

        assert!(table.lookup(key).is_some());
        assert_eq!(table.lookup(&key[..2]), None);
        assert_eq!(table.lookup(&[key[0], key[1], key[2], b'a']), None);
        // E4 B9 8A is not in the table.
        assert_eq!(table.lookup(&[key[0], key[1] ^ 0x01, key[2]]), None);
        assert_eq!(table.lookup("中".as_bytes()), None);
        assert_eq!(table.lookup(b"abc"), None);
    }

    #[test]
    fn adjacent_keys_resolve_to_their_own_entries() {
        let table = GlyphTable::builtin();
        let up = "上".as_bytes();
        let down = "下".as_bytes();

        // Keys differ only in the last bit.
        assert_eq!(up[..2], down[..2]);
        assert_eq!(up[2] ^ 0x01, down[2]);

        let up_index = table.lookup(up).unwrap();
        let down_index = table.lookup(&[up[0], up[1], up[2] ^ 0x01]).unwrap();
        assert_ne!(up_index, down_index);
        assert_eq!(Some(down_index), table.lookup_char('下'));
        assert_eq!(down_index.get(), 10);
    }

    #[test]
    fn duplicate_key_resolves_to_first_entry() {
        let table = GlyphTable::new(&DUPLICATED);
        assert!(!keys_unique(table.entries()));

        let index = table.lookup_char('上').unwrap();
        assert_eq!(index.get(), 0);
        assert_eq!(table.bitmap(index).unwrap()[0], 0x11);
    }

    #[test]
    fn bitmap_rows_are_msb_first() {
        let table = GlyphTable::builtin();
        let entry = table.entry(table.lookup_char('上').unwrap()).unwrap();

        // Vertical stroke sits in column 7.
        assert_eq!(glyph_row(&entry.bitmap, 0), 0x0100);
        assert!(entry.pixel(7, 0));
        assert!(!entry.pixel(6, 0));
        assert!(!entry.pixel(8, 0));

        // Base stroke spans columns 0..15.
        assert_eq!(glyph_row(&entry.bitmap, 13), 0xFFFE);
        assert!(entry.pixel(0, 13));
        assert!(entry.pixel(14, 13));
        assert!(!entry.pixel(15, 13));
    }

    #[test]
    fn out_of_range_pixels_read_as_unset() {
        let bitmap = [0xFF; GLYPH_BITMAP_BYTES];
        assert!(glyph_pixel(&bitmap, 15, 15));
        assert!(!glyph_pixel(&bitmap, GLYPH_WIDTH, 0));
        assert!(!glyph_pixel(&bitmap, 0, GLYPH_HEIGHT));
        assert_eq!(glyph_row(&bitmap, GLYPH_HEIGHT), 0);
    }

    #[test]
    fn index_outside_table_has_no_bitmap() {
        let table = GlyphTable::builtin();
        assert!(table.bitmap(GlyphIndex::new(GLYPH_COUNT)).is_none());
    }
}
