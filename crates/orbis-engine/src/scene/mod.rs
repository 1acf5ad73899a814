//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::{ArcCmd, CircleCmd, TextCmd};
pub use z_index::ZIndex;
