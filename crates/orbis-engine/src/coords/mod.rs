//! Coordinate and geometry types shared across the engine and widgets.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are degrees, 0° at three o'clock, increasing clockwise (screen space).

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
