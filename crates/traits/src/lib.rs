pub mod font;

pub use font::{FontError, GlyphId, GlyphSource, InMemoryGlyphSource};
