//! Text metrics.
//!
//! Fonts are parsed with `fontdue`; only measurement lives here. Rasterizing
//! glyphs is the host renderer's job.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
