use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Arc(ArcCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short shape name, handy for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Arc(_) => "arc",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Text(_) => "text",
        }
    }
}
