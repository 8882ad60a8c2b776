pub mod borders;
pub mod solver;

pub use borders::{BorderPainter, BorderSegment};
pub use solver::{CellMeasure, ColumnSolver};
