use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Border line {0} carries {1} runs but spans {2} extents.")]
    RunMismatch(usize, usize, usize),
    #[error("Row {0} has cells spanning {1} columns but the grid defines {2}.")]
    GridMismatch(usize, usize, usize),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod algorithms;
pub mod flex;
pub mod interface;
pub mod intrinsic;
pub mod table;
pub mod text;

// Re-exports for convenience within the layout crate
pub use self::algorithms::pagination::{
    check_child_fit, BreakAnalysis, PageArea, PageCursor, PaginationStateStack, RootPass,
};
pub use self::flex::direction::{director_for, MainAxisDirector};
pub use self::flex::{container_min_max, main_axis_positions, FlexItem, FlexLine};
pub use self::interface::{BaselineMetrics, InlineLeaf, LayoutResult};
pub use self::intrinsic::{MinMaxWidth, WidthAggregator};
pub use self::table::borders::{
    collapse_runs, horizontal_segments, paint_horizontal, paint_vertical, vertical_segments,
    BorderPainter, BorderSegment,
};
pub use self::table::solver::{grid_min_max, row_min_max, CellMeasure, ColumnSolver};
pub use self::text::preprocessor::{normalize_spaces, ShapedGlyph};

// Re-export geometry types used throughout to prevent type mismatches
pub use folio_types::geometry::{BoxConstraints, Rect, Size};

#[cfg(test)]
mod direction_test;
