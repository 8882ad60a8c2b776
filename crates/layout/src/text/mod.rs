pub mod preprocessor;

pub use preprocessor::{normalize_spaces, ShapedGlyph};
