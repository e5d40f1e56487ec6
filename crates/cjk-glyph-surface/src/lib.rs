#![cfg_attr(not(test), no_std)]

//! Host-side display surfaces for `cjk-glyph-core`.

pub mod ascii_font;
mod framebuffer;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::{FrameBuffer, Tft240x240, Tft320x240};

#[cfg(feature = "embedded-graphics")]
pub use graphics::DrawTargetSurface;
