use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// `FontId::default()` names the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Measuring an unknown id logs a warning
/// and falls back to an empty box one line tall.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?}", id);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        let font = self.fonts.get(id.0);
        if font.is_none() {
            log::warn!("FontSystem: unknown FontId {:?}", id);
        }
        font
    }

    /// Tight ink bounds of a single line of text, `(width, height)` in logical pixels.
    ///
    /// Only the pixels glyphs actually cover are counted, so side bearings and
    /// the space above cap height do not inflate the box. Whitespace-only
    /// strings measure as zero width.
    #[must_use]
    pub fn ink_bounds(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for g in layout.glyphs().iter().filter(|g| g.width > 0 && g.height > 0) {
            min.x = min.x.min(g.x);
            min.y = min.y.min(g.y);
            max.x = max.x.max(g.x + g.width as f32);
            max.y = max.y.max(g.y + g.height as f32);
        }

        if min.x > max.x {
            return Vec2::zero();
        }
        max - min
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
