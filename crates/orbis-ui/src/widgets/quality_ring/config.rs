use std::time::Duration;

use orbis_engine::paint::Color;
use orbis_engine::text::FontId;

use crate::constraints::Edges;

use super::quality::QualityPalette;
use super::segments::{is_valid_segment_count, FULL_CIRCLE};

/// Appearance and timing of a [`QualityRing`](super::QualityRing).
///
/// Setters validate their input: a rejected value is logged, the previous
/// value is kept and the setter returns `false`. The `with_*` forms chain
/// the same setters for construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfig {
    stroke_width: f32,
    total_animation_duration: Duration,
    recolor_animation_duration: Duration,
    text: String,
    text_color: Color,
    max_text_size: Option<f32>,
    color_unspecified: Color,
    idle_stroke_color: Color,
    idle_stroke_width: f32,
    rotation_offset_deg: f32,
    padding: Edges,
    segment_count: u16,
    label_font: FontId,
    palette: QualityPalette,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            stroke_width: 25.0,
            total_animation_duration: Duration::from_secs(10),
            recolor_animation_duration: Duration::from_millis(500),
            text: String::new(),
            text_color: Color::from_argb(0xFF444444),
            max_text_size: None,
            color_unspecified: Color::from_argb(0xFF888888),
            idle_stroke_color: Color::from_argb(0xFFCCCCCC),
            idle_stroke_width: 8.0,
            rotation_offset_deg: 0.0,
            padding: Edges::default(),
            segment_count: FULL_CIRCLE,
            label_font: FontId::default(),
            palette: QualityPalette::default(),
        }
    }
}

fn ignored(name: &str, value: impl std::fmt::Debug) -> bool {
    log::warn!("ignoring invalid {name}: {value:?}");
    false
}

impl RingConfig {
    // ── getters ───────────────────────────────────────────────────────────

    pub fn stroke_width(&self) -> f32 { self.stroke_width }
    pub fn total_animation_duration(&self) -> Duration { self.total_animation_duration }
    pub fn recolor_animation_duration(&self) -> Duration { self.recolor_animation_duration }
    pub fn text(&self) -> &str { &self.text }
    pub fn text_color(&self) -> Color { self.text_color }
    pub fn max_text_size(&self) -> Option<f32> { self.max_text_size }
    pub fn color_unspecified(&self) -> Color { self.color_unspecified }
    pub fn idle_stroke_color(&self) -> Color { self.idle_stroke_color }
    pub fn idle_stroke_width(&self) -> f32 { self.idle_stroke_width }
    /// Rotation applied to every arc, in [0, 360).
    pub fn rotation_offset_deg(&self) -> f32 { self.rotation_offset_deg }
    pub fn padding(&self) -> Edges { self.padding }
    pub fn segment_count(&self) -> u16 { self.segment_count }
    pub fn label_font(&self) -> FontId { self.label_font }
    pub fn palette(&self) -> &QualityPalette { &self.palette }

    // ── setters ───────────────────────────────────────────────────────────

    /// Ring stroke width. Must be positive.
    pub fn set_stroke_width(&mut self, v: f32) -> bool {
        if !(v.is_finite() && v > 0.0) {
            return ignored("stroke width", v);
        }
        self.stroke_width = v;
        true
    }

    /// Length of a full sweep. Must be non-zero. Runs already started keep
    /// the duration they started with.
    pub fn set_total_animation_duration(&mut self, v: Duration) -> bool {
        if v.is_zero() {
            return ignored("total animation duration", v);
        }
        self.total_animation_duration = v;
        true
    }

    /// Default transition length for recolors that do not name one. Must be non-zero.
    pub fn set_recolor_animation_duration(&mut self, v: Duration) -> bool {
        if v.is_zero() {
            return ignored("recolor animation duration", v);
        }
        self.recolor_animation_duration = v;
        true
    }

    /// Label drawn in the middle of the ring. Empty hides it.
    pub fn set_text(&mut self, v: impl Into<String>) -> bool {
        self.text = v.into();
        true
    }

    pub fn set_text_color(&mut self, v: Color) -> bool {
        self.text_color = v;
        true
    }

    /// Upper bound for the fitted label size. Zero or negative removes the bound.
    pub fn set_max_text_size(&mut self, v: f32) -> bool {
        if v.is_nan() {
            return ignored("max text size", v);
        }
        self.max_text_size = (v > 0.0).then_some(v);
        true
    }

    /// Baseline color of every segment and starting color of transitions.
    pub fn set_color_unspecified(&mut self, v: Color) -> bool {
        self.color_unspecified = v;
        true
    }

    pub fn set_idle_stroke_color(&mut self, v: Color) -> bool {
        self.idle_stroke_color = v;
        true
    }

    /// Width of the idle track circles. Zero hides the track.
    pub fn set_idle_stroke_width(&mut self, v: f32) -> bool {
        if !(v.is_finite() && v >= 0.0) {
            return ignored("idle stroke width", v);
        }
        self.idle_stroke_width = v;
        true
    }

    /// Rotation applied to every arc, normalized into [0, 360).
    pub fn set_rotation_offset_deg(&mut self, v: f32) -> bool {
        if !v.is_finite() {
            return ignored("rotation offset", v);
        }
        self.rotation_offset_deg = v.rem_euclid(f32::from(FULL_CIRCLE));
        true
    }

    pub fn set_padding(&mut self, v: Edges) -> bool {
        if !v.is_valid() {
            return ignored("padding", v);
        }
        self.padding = v;
        true
    }

    /// Number of equal segments. Must divide 360; takes effect on the next sweep.
    pub fn set_segment_count(&mut self, v: u16) -> bool {
        if !is_valid_segment_count(v) {
            return ignored("segment count", v);
        }
        self.segment_count = v;
        true
    }

    pub fn set_label_font(&mut self, v: FontId) -> bool {
        self.label_font = v;
        true
    }

    pub fn set_palette(&mut self, v: QualityPalette) -> bool {
        self.palette = v;
        true
    }

    // ── builder forms ─────────────────────────────────────────────────────

    pub fn with_stroke_width(mut self, v: f32) -> Self { self.set_stroke_width(v); self }
    pub fn with_total_animation_duration(mut self, v: Duration) -> Self { self.set_total_animation_duration(v); self }
    pub fn with_recolor_animation_duration(mut self, v: Duration) -> Self { self.set_recolor_animation_duration(v); self }
    pub fn with_text(mut self, v: impl Into<String>) -> Self { self.set_text(v); self }
    pub fn with_text_color(mut self, v: Color) -> Self { self.set_text_color(v); self }
    pub fn with_max_text_size(mut self, v: f32) -> Self { self.set_max_text_size(v); self }
    pub fn with_color_unspecified(mut self, v: Color) -> Self { self.set_color_unspecified(v); self }
    pub fn with_idle_stroke_color(mut self, v: Color) -> Self { self.set_idle_stroke_color(v); self }
    pub fn with_idle_stroke_width(mut self, v: f32) -> Self { self.set_idle_stroke_width(v); self }
    pub fn with_rotation_offset_deg(mut self, v: f32) -> Self { self.set_rotation_offset_deg(v); self }
    pub fn with_padding(mut self, v: Edges) -> Self { self.set_padding(v); self }
    pub fn with_segment_count(mut self, v: u16) -> Self { self.set_segment_count(v); self }
    pub fn with_label_font(mut self, v: FontId) -> Self { self.set_label_font(v); self }
    pub fn with_palette(mut self, v: QualityPalette) -> Self { self.set_palette(v); self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_values_are_ignored() {
        let mut cfg = RingConfig::default();
        assert!(!cfg.set_stroke_width(0.0));
        assert!(!cfg.set_stroke_width(-3.0));
        assert!(!cfg.set_stroke_width(f32::NAN));
        assert!(!cfg.set_total_animation_duration(Duration::ZERO));
        assert!(!cfg.set_recolor_animation_duration(Duration::ZERO));
        assert!(!cfg.set_idle_stroke_width(-1.0));
        assert_eq!(cfg, RingConfig::default());
    }

    #[test]
    fn positive_values_are_applied() {
        let cfg = RingConfig::default()
            .with_stroke_width(12.0)
            .with_total_animation_duration(Duration::from_secs(3))
            .with_recolor_animation_duration(Duration::from_millis(250))
            .with_idle_stroke_width(0.0);
        assert_eq!(cfg.stroke_width(), 12.0);
        assert_eq!(cfg.total_animation_duration(), Duration::from_secs(3));
        assert_eq!(cfg.recolor_animation_duration(), Duration::from_millis(250));
        assert_eq!(cfg.idle_stroke_width(), 0.0);
    }

    #[test]
    fn rotation_is_normalized() {
        let mut cfg = RingConfig::default();
        cfg.set_rotation_offset_deg(450.0);
        assert_eq!(cfg.rotation_offset_deg(), 90.0);
        cfg.set_rotation_offset_deg(-90.0);
        assert_eq!(cfg.rotation_offset_deg(), 270.0);
        cfg.set_rotation_offset_deg(360.0);
        assert_eq!(cfg.rotation_offset_deg(), 0.0);
    }

    #[test]
    fn max_text_size_zero_unsets() {
        let mut cfg = RingConfig::default().with_max_text_size(18.0);
        assert_eq!(cfg.max_text_size(), Some(18.0));
        cfg.set_max_text_size(0.0);
        assert_eq!(cfg.max_text_size(), None);
    }

    #[test]
    fn segment_count_must_divide_circle() {
        let mut cfg = RingConfig::default();
        assert!(!cfg.set_segment_count(7));
        assert!(!cfg.set_segment_count(0));
        assert_eq!(cfg.segment_count(), 360);
        assert!(cfg.set_segment_count(1));
        assert_eq!(cfg.segment_count(), 1);
    }

    #[test]
    fn negative_padding_is_ignored() {
        let mut cfg = RingConfig::default();
        assert!(!cfg.set_padding(Edges::all(-2.0)));
        assert!(cfg.set_padding(Edges::all(4.0)));
        assert_eq!(cfg.padding(), Edges::all(4.0));
    }
}
