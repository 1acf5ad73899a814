pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod text;

pub use arc::ArcCmd;
pub use circle::CircleCmd;
pub use text::TextCmd;
