use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked (unfilled) circle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Stroke,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, stroke: Stroke) -> Self {
        Self { center, radius, stroke }
    }
}

impl DrawList {
    /// Records a stroked circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, stroke)));
    }
}
