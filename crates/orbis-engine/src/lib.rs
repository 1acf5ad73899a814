//! Orbis engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the widget layer:
//! geometry, paint, the recorded draw stream, text metrics and frame timing.
//! Nothing here talks to a GPU or a window system; hosts replay the
//! [`scene::DrawList`] with whatever backend they own.

pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
