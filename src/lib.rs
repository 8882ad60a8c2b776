//! Paginated document layout core.
//!
//! The algorithm crates do the work; this crate stitches them together and
//! re-exports the public surface under one name.

pub use folio_layout as layout;
pub use folio_style as style;
pub use folio_traits as traits;
pub use folio_types as types;

pub use folio_layout::{
    check_child_fit, director_for, main_axis_positions, normalize_spaces, BaselineMetrics,
    BorderPainter, BorderSegment, BreakAnalysis, CellMeasure, ColumnSolver, FlexItem, FlexLine,
    InlineLeaf, LayoutError, LayoutResult, MainAxisDirector, MinMaxWidth, PageArea, PageCursor,
    PaginationStateStack, RootPass, ShapedGlyph, WidthAggregator,
};
pub use folio_style::{Border, BorderStyle, Dimension, FlexDirection, JustifyContent, Margins, PageSize};
pub use folio_traits::{GlyphId, GlyphSource, InMemoryGlyphSource};
pub use folio_types::{BoxConstraints, Color, Rect, Size};
