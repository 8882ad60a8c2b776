//! GlyphSource trait for abstracting glyph metrics lookup.
//!
//! Layout never touches font files directly; it asks a `GlyphSource` for the
//! glyph of a scalar and for glyph advances in 1000-unit text space.

use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for glyph metric providers.
#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font '{0}' is not registered")]
    UnknownFont(String),

    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// Identifier of a glyph inside one font program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GlyphId(pub u16);

/// A source of glyph identity and advance-width metrics.
///
/// Advances are expressed in the 1000-units-per-em text space used by PDF
/// width arrays, independent of the rendered font size.
pub trait GlyphSource: Debug {
    /// The glyph representing `scalar`, falling back to the font's notdef
    /// glyph when the scalar is not covered.
    fn glyph_for(&self, scalar: char) -> GlyphId;

    /// Advance width of `glyph` in 1000-unit text space.
    fn advance(&self, glyph: GlyphId) -> i32;

    /// Whether every glyph in the font carries the same advance.
    fn is_fixed_pitch(&self) -> bool;
}

/// A glyph source backed by an explicit scalar→(glyph, advance) table.
///
/// Works in any environment including WASM; used by tests and by hosts that
/// carry pre-extracted metrics instead of font files.
#[derive(Debug, Default)]
pub struct InMemoryGlyphSource {
    glyphs: HashMap<char, (GlyphId, i32)>,
    fixed_pitch: bool,
}

impl InMemoryGlyphSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed_pitch(mut self, fixed: bool) -> Self {
        self.fixed_pitch = fixed;
        self
    }

    /// Register the metrics of one scalar.
    pub fn with_glyph(mut self, scalar: char, glyph: GlyphId, advance: i32) -> Self {
        self.glyphs.insert(scalar, (glyph, advance));
        self
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphSource for InMemoryGlyphSource {
    fn glyph_for(&self, scalar: char) -> GlyphId {
        self.glyphs
            .get(&scalar)
            .map(|(glyph, _)| *glyph)
            .unwrap_or_default()
    }

    fn advance(&self, glyph: GlyphId) -> i32 {
        self.glyphs
            .values()
            .find(|(id, _)| *id == glyph)
            .map(|(_, advance)| *advance)
            .unwrap_or(0)
    }

    fn is_fixed_pitch(&self) -> bool {
        self.fixed_pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_registered_metrics() {
        let source = InMemoryGlyphSource::new().with_glyph(' ', GlyphId(3), 250);

        let glyph = source.glyph_for(' ');
        assert_eq!(glyph, GlyphId(3));
        assert_eq!(source.advance(glyph), 250);
    }

    #[test]
    fn unknown_scalar_falls_back_to_notdef() {
        let source = InMemoryGlyphSource::new();
        assert_eq!(source.glyph_for('x'), GlyphId(0));
        assert_eq!(source.advance(GlyphId(0)), 0);
    }

    #[test]
    fn fixed_pitch_flag_round_trips() {
        let source = InMemoryGlyphSource::new().fixed_pitch(true);
        assert!(source.is_fixed_pitch());
        assert!(!InMemoryGlyphSource::new().is_fixed_pitch());
    }
}
