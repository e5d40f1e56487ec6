#![cfg_attr(not(test), no_std)]

//! Mixed ASCII/CJK text rendering onto a pixel-addressable surface.
//!
//! ASCII bytes are handed to the surface's built-in font, 3-byte UTF-8
//! sequences found in the fixed [`glyph_table`] are blitted as 16x16 bitmaps,
//! and everything else is skipped one byte at a time.

pub mod glyph_table;
pub mod raster;
pub mod scanner;
pub mod surface;

pub use glyph_table::{GlyphEntry, GlyphIndex, GlyphTable};
pub use raster::{RenderReport, RenderState, RenderStatus, Renderer};
pub use scanner::{Scanner, Step, Token, TokenKind};
pub use surface::{DisplaySurface, ThemeColor};
