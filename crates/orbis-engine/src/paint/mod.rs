//! Paint model shared between widgets and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke description for outlined shapes (arcs, circles)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::Color;
pub use stroke::Stroke;
