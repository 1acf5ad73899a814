use crate::coords::Rect;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked elliptical arc payload.
///
/// `oval` bounds the full ellipse the arc is cut from. Angles are degrees,
/// 0° at three o'clock, positive `sweep_deg` running clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub oval: Rect,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub stroke: Stroke,
}

impl ArcCmd {
    #[inline]
    pub fn new(oval: Rect, start_deg: f32, sweep_deg: f32, stroke: Stroke) -> Self {
        Self { oval, start_deg, sweep_deg, stroke }
    }

    /// Angle where the arc ends, not normalized.
    #[inline]
    pub fn end_deg(&self) -> f32 {
        self.start_deg + self.sweep_deg
    }
}

impl DrawList {
    /// Records a stroked arc draw command.
    #[inline]
    pub fn push_arc(&mut self, z: ZIndex, oval: Rect, start_deg: f32, sweep_deg: f32, stroke: Stroke) {
        self.push(z, DrawCmd::Arc(ArcCmd::new(oval, start_deg, sweep_deg, stroke)));
    }
}
