//! Render state and the per-token rasterizer.

use core::fmt::Debug;

use heapless::Vec;
use log::{debug, trace, warn};

use crate::{
    glyph_table::{GLYPH_HEIGHT, GLYPH_WIDTH, GlyphBitmap, GlyphTable, glyph_row},
    scanner::{Scanner, Step, TokenKind},
    surface::{DisplaySurface, ThemeColor},
};


/// The only glyph size the table can draw.
pub const SUPPORTED_GLYPH_SIZE: u8 = GLYPH_HEIGHT as u8;

/// Skipped offsets kept in a [`RenderReport`].
pub const REPORT_SKIP_CAPACITY: usize = 8;

/// Called once per skipped byte with its offset and value.
pub type SkipHook = fn(offset: usize, byte: u8);

/// Colors, glyph size and starting cursor shared by render calls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderState<C> {
    pub foreground: C,
    pub background: C,
    pub glyph_size: u8,
    /// Starting cursor of every render call. Never advanced by rendering.
    pub origin: (i32, i32),
}

impl<C> RenderState<C> {
    pub const fn new(foreground: C, background: C) -> Self {
        Self {
            foreground,
            background,
            glyph_size: SUPPORTED_GLYPH_SIZE,
            origin: (0, 0),
        }
    }
}

impl<C: ThemeColor> Default for RenderState<C> {
    fn default() -> Self {
        Self::new(C::FOREGROUND, C::BACKGROUND)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderStatus {
    Rendered,
    /// No surface bound; nothing drawn.
    NoSurface,
    /// Glyph size other than 16; nothing drawn.
    UnsupportedGlyphSize(u8),
}

/// What a render call did. Rendering never fails, so this is the only
/// place skipped input and surface faults become visible.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderReport {
    pub status: RenderStatus,
    pub ascii: usize,
    pub cjk: usize,
    pub skipped_bytes: usize,
    /// First skipped offsets, capped at [`REPORT_SKIP_CAPACITY`].
    pub skipped_offsets: Vec<usize, REPORT_SKIP_CAPACITY>,
    pub surface_errors: usize,
    /// Cursor x after the last token.
    pub end_x: i32,
}

impl RenderReport {
    fn new(status: RenderStatus, start_x: i32) -> Self {
        Self {
            status,
            ascii: 0,
            cjk: 0,
            skipped_bytes: 0,
            skipped_offsets: Vec::new(),
            surface_errors: 0,
            end_x: start_x,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.status == RenderStatus::Rendered
    }

    /// Tokens drawn (ASCII plus CJK).
    pub fn drawn(&self) -> usize {
        self.ascii + self.cjk
    }

    fn note_skip(&mut self, offset: usize) {
        self.skipped_bytes += 1;
        let _ = self.skipped_offsets.push(offset);
    }

    fn note_surface<E: Debug>(&mut self, result: Result<(), E>) {
        if let Err(err) = result {
            if self.surface_errors == 0 {
                warn!("display surface rejected a draw: {:?}", err);
            }
            self.surface_errors += 1;
        }
    }
}

/// Text renderer bound to at most one display surface.
pub struct Renderer<'g, S: DisplaySurface> {
    surface: Option<S>,
    state: RenderState<S::Color>,
    table: &'g GlyphTable,
    skip_hook: Option<SkipHook>,
}

impl<S> Renderer<'static, S>
where
    S: DisplaySurface,
    S::Color: ThemeColor,
{
    /// Builtin glyph table, white on black, origin (0, 0), no surface.
    pub fn new() -> Self {
        Self::with_table(GlyphTable::builtin())
    }
}

impl<S> Default for Renderer<'static, S>
where
    S: DisplaySurface,
    S::Color: ThemeColor,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, S> Renderer<'g, S>
where
    S: DisplaySurface,
{
    pub fn with_table(table: &'g GlyphTable) -> Self
    where
        S::Color: ThemeColor,
    {
        Self::with_state(table, RenderState::default())
    }

    pub fn with_state(table: &'g GlyphTable, state: RenderState<S::Color>) -> Self {
        Self {
            surface: None,
            state,
            table,
            skip_hook: None,
        }
    }

    /// Binds the surface to draw on. Until then every render is a no-op.
    pub fn bind_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Releases the bound surface, if any.
    pub fn unbind_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn set_foreground(&mut self, color: S::Color) {
        self.state.foreground = color;
    }

    pub fn set_background(&mut self, color: S::Color) {
        self.state.background = color;
    }

    /// Stores the glyph size. Rendering is a no-op unless it is 16.
    pub fn set_glyph_size(&mut self, size: u8) {
        self.state.glyph_size = size;
    }

    /// Sets the starting cursor used by every following render call.
    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.state.origin = (x, y);
    }

    pub fn set_skip_hook(&mut self, hook: Option<SkipHook>) {
        self.skip_hook = hook;
    }

    pub fn state(&self) -> &RenderState<S::Color> {
        &self.state
    }

    pub fn table(&self) -> &'g GlyphTable {
        self.table
    }

    pub fn render_str(&mut self, text: &str) -> RenderReport {
        self.render(text.as_bytes())
    }

    /// Draws `text` starting at the stored origin.
    pub fn render(&mut self, text: &[u8]) -> RenderReport {
        let (mut x, y) = self.state.origin;

        let Some(surface) = self.surface.as_mut() else {
            debug!("render skipped: no display surface bound");
            return RenderReport::new(RenderStatus::NoSurface, x);
        };

        if self.state.glyph_size != SUPPORTED_GLYPH_SIZE {
            debug!(
                "render skipped: glyph size {} unsupported",
                self.state.glyph_size
            );
            return RenderReport::new(RenderStatus::UnsupportedGlyphSize(self.state.glyph_size), x);
        }

        let fg = self.state.foreground;
        let bg = self.state.background;
        let mut report = RenderReport::new(RenderStatus::Rendered, x);

        for step in Scanner::new(self.table, text) {
            match step {
                Step::Token(token) => {
                    match token.kind {
                        TokenKind::Ascii(byte) => {
                            report.note_surface(surface.draw_ascii(x, y, byte, fg, bg));
                            report.ascii += 1;
                        }
                        TokenKind::Cjk(index) => {
                            if let Some(bitmap) = self.table.bitmap(index) {
                                blit_glyph(surface, x, y, bitmap, fg, bg, &mut report);
                            }
                            report.cjk += 1;
                        }
                    }
                    x = x.saturating_add(token.advance);
                }
                Step::Skip { offset, byte } => {
                    trace!("skip byte {:#04x} at {}", byte, offset);
                    report.note_skip(offset);
                    if let Some(hook) = self.skip_hook {
                        hook(offset, byte);
                    }
                }
            }
        }

        report.end_x = x;
        debug!(
            "rendered {} bytes at ({}, {}): ascii={} cjk={} skipped={}",
            text.len(),
            self.state.origin.0,
            y,
            report.ascii,
            report.cjk,
            report.skipped_bytes
        );

        report
    }
}

/// Paints all 256 pixels of a glyph cell; clear bits get the background.
fn blit_glyph<S: DisplaySurface>(
    surface: &mut S,
    x: i32,
    y: i32,
    bitmap: &GlyphBitmap,
    fg: S::Color,
    bg: S::Color,
    report: &mut RenderReport,
) {
    for row in 0..GLYPH_HEIGHT {
        let bits = glyph_row(bitmap, row);
        let py = y.saturating_add(row as i32);

        for col in 0..GLYPH_WIDTH {
            let color = if bits & (0x8000 >> col) != 0 { fg } else { bg };
            let px = x.saturating_add(col as i32);
            report.note_surface(surface.draw_pixel(px, py, color));
        }
    }
}
