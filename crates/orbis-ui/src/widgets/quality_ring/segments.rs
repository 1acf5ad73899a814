use std::ops::Range;

use orbis_engine::paint::Color;

/// Degrees in a full turn.
pub const FULL_CIRCLE: u16 = 360;

/// Returns true when `count` equal segments tile the circle on whole degrees.
#[inline]
pub fn is_valid_segment_count(count: u16) -> bool {
    count > 0 && FULL_CIRCLE % count == 0
}

/// A fixed angular slice of the ring holding one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_deg: f32,
    pub span_deg: f32,
    pub color: Color,
}

impl Segment {
    #[inline]
    pub fn end_deg(&self) -> f32 {
        self.start_deg + self.span_deg
    }

    /// Portion of this segment revealed by a sweep of `sweep_deg`, in
    /// `[0, span_deg]`.
    #[inline]
    pub fn visible_sweep(&self, sweep_deg: f32) -> f32 {
        (sweep_deg - self.start_deg).clamp(0.0, self.span_deg)
    }
}

/// Ordered partition of [0, 360) into equal segments.
///
/// Segment `i` covers `[i·span, (i+1)·span)` with `span = 360 / len`, so the
/// spans always sum to a full turn. Degree arguments are whole degrees in
/// [0, 360]; callers validate ranges before writing.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStore {
    segments: Vec<Segment>,
    span: u16,
}

impl SegmentStore {
    /// Partitions the circle into `count` segments filled with `fill`.
    ///
    /// `count` must divide 360; anything else falls back to one segment per degree.
    pub fn new(count: u16, fill: Color) -> Self {
        let count = if is_valid_segment_count(count) {
            count
        } else {
            log::warn!("segment count {count} does not divide {FULL_CIRCLE}; using {FULL_CIRCLE}");
            FULL_CIRCLE
        };
        let span = FULL_CIRCLE / count;
        let segments = (0..count)
            .map(|i| Segment {
                start_deg: f32::from(i * span),
                span_deg: f32::from(span),
                color: fill,
            })
            .collect();
        Self { segments, span }
    }

    /// One segment per degree, the reference granularity.
    pub fn per_degree(fill: Color) -> Self {
        Self::new(FULL_CIRCLE, fill)
    }

    /// A single segment spanning the whole ring.
    pub fn full_circle(fill: Color) -> Self {
        Self::new(1, fill)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a store covers the full circle with at least one segment.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Width of every segment in degrees.
    #[inline]
    pub fn span_deg(&self) -> u16 {
        self.span
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Paints every segment with `fill`.
    pub fn reset(&mut self, fill: Color) {
        for s in &mut self.segments {
            s.color = fill;
        }
    }

    /// Indices of the segments intersecting `[from_deg, to_deg)`.
    ///
    /// Empty when `from_deg >= to_deg`. With coarse segments a partial overlap
    /// selects the whole segment.
    pub fn segments_in_range(&self, from_deg: u16, to_deg: u16) -> Range<usize> {
        let to_deg = to_deg.min(FULL_CIRCLE);
        if from_deg >= to_deg {
            let i = usize::from(from_deg.min(FULL_CIRCLE) / self.span).min(self.len());
            return i..i;
        }
        let first = usize::from(from_deg / self.span);
        let last = usize::from(to_deg.div_ceil(self.span)).min(self.len());
        first..last
    }

    /// Sets one segment's color. Returns false when `index` is out of bounds.
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        match self.segments.get_mut(index) {
            Some(s) => {
                s.color = color;
                true
            }
            None => false,
        }
    }

    /// Sets every segment intersecting `[from_deg, to_deg)` to `color`.
    pub fn set_color_range(&mut self, from_deg: u16, to_deg: u16, color: Color) {
        let range = self.segments_in_range(from_deg, to_deg);
        for s in &mut self.segments[range] {
            s.color = color;
        }
    }

    /// Color of the segment covering `deg` (degrees past 359 wrap).
    pub fn color_at(&self, deg: u16) -> Color {
        let i = usize::from((deg % FULL_CIRCLE) / self.span);
        self.segments[i].color
    }
}
