//! Whitespace normalization ahead of width measurement and line breaking.
//!
//! Typographic spaces and tabs have no glyph of their own in most embedded
//! fonts; each is rewritten to the canonical space glyph whose recorded
//! advance reproduces the intended gap. Measurement and line breaking then
//! only ever see the space glyph.

use folio_traits::font::{GlyphId, GlyphSource};

/// A glyph paired with the advance it contributes to its line, in
/// 1000-unit text space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    pub codepoint: char,
    pub glyph: GlyphId,
    pub advance: i32,
}

impl ShapedGlyph {
    pub fn new(codepoint: char, glyph: GlyphId, advance: i32) -> Self {
        Self {
            codepoint,
            glyph,
            advance,
        }
    }
}

const EN_SPACE: char = '\u{2002}';
const EM_SPACE: char = '\u{2003}';
const THIN_SPACE: char = '\u{2009}';
const TAB: char = '\t';

// PDF text space: 1000 units per em regardless of the font's design grid.
const UNITS_PER_EM: i32 = 1000;

/// Rewrites typographic spaces to the canonical space glyph.
///
/// The space glyph keeps its own advance when drawn; the recorded advance
/// is the remainder needed to reach the nominal gap (half, full, or a fifth
/// of an em), or 0 in fixed-pitch fonts where every cell is already equal.
/// Tabs become three space advances. Running the function on its own output
/// changes nothing.
pub fn normalize_spaces(glyphs: &[ShapedGlyph], font: &dyn GlyphSource) -> Vec<ShapedGlyph> {
    glyphs
        .iter()
        .map(|shaped| match shaped.codepoint {
            EN_SPACE => substitute(font, UNITS_PER_EM / 2),
            EM_SPACE => substitute(font, UNITS_PER_EM),
            THIN_SPACE => substitute(font, UNITS_PER_EM / 5),
            TAB => tab_substitute(font),
            _ => *shaped,
        })
        .collect()
}

fn substitute(font: &dyn GlyphSource, nominal_gap: i32) -> ShapedGlyph {
    let space = font.glyph_for(' ');
    let advance = if font.is_fixed_pitch() {
        0
    } else {
        nominal_gap - font.advance(space)
    };
    checked(space, advance)
}

fn tab_substitute(font: &dyn GlyphSource) -> ShapedGlyph {
    let space = font.glyph_for(' ');
    checked(space, 3 * font.advance(space))
}

fn checked(glyph: GlyphId, advance: i32) -> ShapedGlyph {
    // Advances are stored as 16-bit values downstream; an overflow here is
    // a defect in the metrics source, not a recoverable condition.
    assert!(
        advance >= i16::MIN as i32 && advance <= i16::MAX as i32,
        "substituted advance {advance} does not fit 16-bit text space"
    );
    ShapedGlyph::new(' ', glyph, advance)
}
