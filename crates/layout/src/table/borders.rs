//! Border lines shared between adjacent table cells.
//!
//! After row and column geometry is resolved, the grid is described as one
//! [`BorderSegment`] per physical border line. Resolution then picks the
//! dominant border wherever two cells meet and paints one instruction per
//! run, without ever re-querying the table grid.

use crate::LayoutError;
use folio_style::border::Border;
use folio_types::geometry::Rect;

/// Describes one border line in a table grid: its index among parallel
/// lines, where it starts along its main axis, its fixed cross-axis
/// coordinate, and the cell extents it traverses. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSegment {
    index: usize,
    main_start: f32,
    cross_fixed: f32,
    main_extents: Vec<f32>,
}

impl BorderSegment {
    pub fn new(index: usize, main_start: f32, cross_fixed: f32, main_extents: Vec<f32>) -> Self {
        Self {
            index,
            main_start,
            cross_fixed,
            main_extents,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn main_start(&self) -> f32 {
        self.main_start
    }

    pub fn cross_fixed(&self) -> f32 {
        self.cross_fixed
    }

    pub fn main_extents(&self) -> &[f32] {
        &self.main_extents
    }

    /// Absolute coordinates of the run boundaries this line traverses:
    /// `main_extents.len() + 1` values starting at `main_start`.
    pub fn run_boundaries(&self) -> Vec<f32> {
        let mut boundaries = Vec::with_capacity(self.main_extents.len() + 1);
        let mut cursor = self.main_start;
        boundaries.push(cursor);
        for extent in &self.main_extents {
            cursor += extent;
            boundaries.push(cursor);
        }
        boundaries
    }

    pub fn main_end(&self) -> f32 {
        self.main_start + self.main_extents.iter().sum::<f32>()
    }
}

/// One segment per horizontal grid line (`row_heights.len() + 1` of them),
/// running along x and spanning every column.
pub fn horizontal_segments(
    origin: (f32, f32),
    column_widths: &[f32],
    row_heights: &[f32],
) -> Vec<BorderSegment> {
    let (x, y) = origin;
    let mut cross = y;
    let mut segments = Vec::with_capacity(row_heights.len() + 1);
    for index in 0..=row_heights.len() {
        segments.push(BorderSegment::new(index, x, cross, column_widths.to_vec()));
        if let Some(height) = row_heights.get(index) {
            cross += height;
        }
    }
    segments
}

/// One segment per vertical grid line (`column_widths.len() + 1` of them),
/// running along y and spanning every row.
pub fn vertical_segments(
    origin: (f32, f32),
    column_widths: &[f32],
    row_heights: &[f32],
) -> Vec<BorderSegment> {
    let (x, y) = origin;
    let mut cross = x;
    let mut segments = Vec::with_capacity(column_widths.len() + 1);
    for index in 0..=column_widths.len() {
        segments.push(BorderSegment::new(index, y, cross, row_heights.to_vec()));
        if let Some(width) = column_widths.get(index) {
            cross += width;
        }
    }
    segments
}

/// Output surface for resolved border runs. Draw failures are not expected
/// to be recoverable mid-draw, so the sink reports nothing back.
pub trait BorderPainter {
    fn draw_run(&mut self, run: Rect, border: &Border);
}

/// Resolves the borders declared on the two sides of a shared line, run by
/// run: the visually dominant border wins, a side with no border loses.
pub fn collapse_runs(near: &[Option<Border>], far: &[Option<Border>]) -> Vec<Option<Border>> {
    near.iter()
        .zip(far.iter())
        .map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => {
                if b.wins_over(a) {
                    Some(b.clone())
                } else {
                    Some(a.clone())
                }
            }
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        })
        .collect()
}

enum SegmentAxis {
    Horizontal,
    Vertical,
}

/// Paints one horizontal border line. `runs` carries the resolved border of
/// each traversed cell extent; adjacent identical runs are merged so every
/// visible stretch produces exactly one draw instruction.
pub fn paint_horizontal(
    segment: &BorderSegment,
    runs: &[Option<Border>],
    painter: &mut dyn BorderPainter,
) -> Result<(), LayoutError> {
    paint_segment(segment, runs, painter, SegmentAxis::Horizontal)
}

/// Paints one vertical border line; see [`paint_horizontal`].
pub fn paint_vertical(
    segment: &BorderSegment,
    runs: &[Option<Border>],
    painter: &mut dyn BorderPainter,
) -> Result<(), LayoutError> {
    paint_segment(segment, runs, painter, SegmentAxis::Vertical)
}

fn paint_segment(
    segment: &BorderSegment,
    runs: &[Option<Border>],
    painter: &mut dyn BorderPainter,
    axis: SegmentAxis,
) -> Result<(), LayoutError> {
    if runs.len() != segment.main_extents().len() {
        return Err(LayoutError::RunMismatch(
            segment.index(),
            runs.len(),
            segment.main_extents().len(),
        ));
    }

    let boundaries = segment.run_boundaries();
    let mut i = 0;
    while i < runs.len() {
        let Some(border) = &runs[i] else {
            i += 1;
            continue;
        };
        // Merge the longest stretch sharing this exact border.
        let mut j = i + 1;
        while j < runs.len() && runs[j].as_ref() == Some(border) {
            j += 1;
        }
        if border.width > 0.0 {
            let from = boundaries[i];
            let length = boundaries[j] - from;
            let run = match axis {
                SegmentAxis::Horizontal => Rect::new(
                    from,
                    segment.cross_fixed() - border.width / 2.0,
                    length,
                    border.width,
                ),
                SegmentAxis::Vertical => Rect::new(
                    segment.cross_fixed() - border.width / 2.0,
                    from,
                    border.width,
                    length,
                ),
            };
            painter.draw_run(run, border);
        }
        i = j;
    }
    Ok(())
}
