//! Byte scanner that splits text into ASCII and table-glyph tokens.
//!
//! Decoding never fails: a byte that is neither ASCII nor the start of a
//! known 3-byte glyph is skipped on its own, and scanning resumes at the
//! next byte.

use crate::glyph_table::{GLYPH_KEY_BYTES, GLYPH_WIDTH, GlyphIndex, GlyphTable};

/// Horizontal step after an ASCII character.
///
/// Fixed so ASCII lines up with the 16 px CJK cells; it is not the delegate
/// font's measured width.
pub const ASCII_ADVANCE: i32 = 10;
/// Horizontal step after a CJK glyph.
pub const CJK_ADVANCE: i32 = GLYPH_WIDTH as i32;

const ASCII_MASK: u8 = 0x80;
const LEAD3_MASK: u8 = 0xE0;

/// Returns `true` when the top three bits are set.
///
/// This also accepts 4-byte leads (`0xF0..`); those never match a table key.
#[inline]
pub const fn is_multibyte_lead(byte: u8) -> bool {
    byte & LEAD3_MASK == LEAD3_MASK
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Ascii(u8),
    Cjk(GlyphIndex),
}

/// One classified unit of input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first consumed byte.
    pub offset: usize,
    /// Bytes consumed.
    pub len: usize,
    /// Pixels to move right after drawing.
    pub advance: i32,
}

impl Token {
    pub const fn ascii(offset: usize, byte: u8) -> Self {
        Self {
            kind: TokenKind::Ascii(byte),
            offset,
            len: 1,
            advance: ASCII_ADVANCE,
        }
    }

    pub const fn cjk(offset: usize, index: GlyphIndex) -> Self {
        Self {
            kind: TokenKind::Cjk(index),
            offset,
            len: GLYPH_KEY_BYTES,
            advance: CJK_ADVANCE,
        }
    }
}

/// Result of one decode step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Token(Token),
    /// One unrecognised byte was consumed.
    Skip { offset: usize, byte: u8 },
}

impl Step {
    pub const fn consumed(&self) -> usize {
        match self {
            Self::Token(token) => token.len,
            Self::Skip { .. } => 1,
        }
    }
}

/// Decodes the unit starting at `pos`. Returns `None` at end of input.
pub fn decode_at(table: &GlyphTable, text: &[u8], pos: usize) -> Option<Step> {
    let byte = *text.get(pos)?;

    if byte & ASCII_MASK == 0 {
        return Some(Step::Token(Token::ascii(pos, byte)));
    }

    // A lead byte within the last two bytes never reaches the table.
    if pos + 2 < text.len() && is_multibyte_lead(byte) {
        if let Some(index) = table.lookup(&text[pos..pos + GLYPH_KEY_BYTES]) {
            return Some(Step::Token(Token::cjk(pos, index)));
        }
    }

    Some(Step::Skip { offset: pos, byte })
}

/// Iterator of decode steps over a byte buffer.
#[derive(Clone, Debug)]
pub struct Scanner<'t, 'g> {
    table: &'g GlyphTable,
    text: &'t [u8],
    pos: usize,
}

impl<'t, 'g> Scanner<'t, 'g> {
    pub const fn new(table: &'g GlyphTable, text: &'t [u8]) -> Self {
        Self {
            table,
            text,
            pos: 0,
        }
    }

    /// Current read offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_finished(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Drops skip steps and yields tokens only.
    pub fn tokens(self) -> impl Iterator<Item = Token> {
        self.filter_map(|step| match step {
            Step::Token(token) => Some(token),
            Step::Skip { .. } => None,
        })
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        let step = decode_at(self.table, self.text, self.pos)?;
        self.pos += step.consumed();
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn steps(text: &[u8]) -> Vec<Step, 32> {
        let mut out = Vec::new();
        for step in Scanner::new(GlyphTable::builtin(), text) {
            out.push(step).unwrap();
        }
        out
    }

    fn index_of(ch: char) -> GlyphIndex {
        GlyphTable::builtin().lookup_char(ch).unwrap()
    }

    #[test]
    fn ascii_bytes_are_single_byte_tokens() {
        let out = steps(b"A1 :");
        assert_eq!(out.len(), 4);
        for (i, step) in out.iter().enumerate() {
            let Step::Token(token) = step else {
                panic!("expected token at {i}");
            };
            assert_eq!(token.offset, i);
            assert_eq!(token.len, 1);
            assert_eq!(token.advance, ASCII_ADVANCE);
        }
        assert_eq!(out[0], Step::Token(Token::ascii(0, b'A')));
    }

    #[test]
    fn control_bytes_are_ascii_too() {
        assert_eq!(
            steps(b"\n\0"),
            [
                Step::Token(Token::ascii(0, b'\n')),
                Step::Token(Token::ascii(1, 0)),
            ]
        );
    }

    #[test]
    fn every_builtin_key_decodes_to_its_index() {
        for (i, entry) in GlyphTable::builtin().iter().enumerate() {
            let out = steps(&entry.key);
            assert_eq!(
                out,
                [Step::Token(Token::cjk(0, GlyphIndex::new(i)))],
                "{}",
                entry.as_str()
            );
        }
    }

    #[test]
    fn mixed_text_keeps_offsets() {
        let text = "内存:42%".as_bytes();
        let out = steps(text);

        assert_eq!(out[0], Step::Token(Token::cjk(0, index_of('内'))));
        assert_eq!(out[1], Step::Token(Token::cjk(3, index_of('存'))));
        assert_eq!(out[2], Step::Token(Token::ascii(6, b':')));
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn unknown_three_byte_char_skips_one_byte_at_a_time() {
        // U+4E2D is not in the table.
        let out = steps("中A".as_bytes());
        assert_eq!(
            out,
            [
                Step::Skip { offset: 0, byte: 0xE4 },
                Step::Skip { offset: 1, byte: 0xB8 },
                Step::Skip { offset: 2, byte: 0xAD },
                Step::Token(Token::ascii(3, b'A')),
            ]
        );
    }

    #[test]
    fn lead_byte_near_end_is_never_looked_up() {
        let key = "上".as_bytes();

        // Truncated copy of a real key.
        let out = steps(&key[..2]);
        assert_eq!(
            out,
            [
                Step::Skip { offset: 0, byte: key[0] },
                Step::Skip { offset: 1, byte: key[1] },
            ]
        );

        let out = steps(&[b'x', key[0]]);
        assert_eq!(out[1], Step::Skip { offset: 1, byte: key[0] });
    }

    #[test]
    fn skip_resumes_inside_a_broken_sequence() {
        let key = "上".as_bytes();
        // Stray lead followed by a complete key: the key is still found.
        let text = [0xE8, key[0], key[1], key[2]];
        let out = steps(&text);
        assert_eq!(
            out,
            [
                Step::Skip { offset: 0, byte: 0xE8 },
                Step::Token(Token::cjk(1, index_of('上'))),
            ]
        );
    }

    #[test]
    fn two_and_four_byte_sequences_are_skipped() {
        // "é" (2 bytes) and an emoji (4 bytes).
        let text = "é😀".as_bytes();
        let out = steps(text);
        assert_eq!(out.len(), text.len());
        assert!(out.iter().all(|step| matches!(step, Step::Skip { .. })));
    }

    #[test]
    fn scanner_position_tracks_consumed_bytes() {
        let text = "上a".as_bytes();
        let mut scanner = Scanner::new(GlyphTable::builtin(), text);

        assert_eq!(scanner.position(), 0);
        scanner.next();
        assert_eq!(scanner.position(), 3);
        scanner.next();
        assert!(scanner.is_finished());
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn tokens_drop_skips() {
        let text = "\u{FF}上\u{80}".as_bytes();
        let tokens: Vec<Token, 4> = Scanner::new(GlyphTable::builtin(), text).tokens().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Cjk(index_of('上')));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(steps(b"").is_empty());
    }
}
