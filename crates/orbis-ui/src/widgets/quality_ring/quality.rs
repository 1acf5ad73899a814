use orbis_engine::paint::Color;

/// Classification a stretch of the ring can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Good,
    Medium,
    Bad,
    Unspecified,
}

/// Colors for the tagged qualities.
///
/// `Unspecified` has no entry: it resolves to the ring's unspecified color
/// so that "clearing" a range and the baseline never drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityPalette {
    pub good: Color,
    pub medium: Color,
    pub bad: Color,
}

impl QualityPalette {
    pub fn color_for(&self, quality: Quality, unspecified: Color) -> Color {
        match quality {
            Quality::Good => self.good,
            Quality::Medium => self.medium,
            Quality::Bad => self.bad,
            Quality::Unspecified => unspecified,
        }
    }
}

impl Default for QualityPalette {
    fn default() -> Self {
        Self {
            good: Color::from_argb(0xFF4CAF50),
            medium: Color::from_argb(0xFFFFC107),
            bad: Color::from_argb(0xFFF44336),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_quality() {
        let palette = QualityPalette::default();
        let gray = Color::from_argb(0xFF888888);
        assert_eq!(palette.color_for(Quality::Good, gray), palette.good);
        assert_eq!(palette.color_for(Quality::Medium, gray), palette.medium);
        assert_eq!(palette.color_for(Quality::Bad, gray), palette.bad);
        assert_eq!(palette.color_for(Quality::Unspecified, gray), gray);
    }
}
