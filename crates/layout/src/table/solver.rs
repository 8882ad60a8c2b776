use crate::intrinsic::{MinMaxWidth, WidthAggregator};
use crate::LayoutError;
use folio_style::dimension::Dimension;

/// Trait to abstract cell properties needed for width solving.
/// This keeps the solver decoupled from the concrete cell node type.
pub trait CellMeasure {
    fn colspan(&self) -> usize {
        1
    }

    /// Intrinsic widths of the cell content, or `None` when the cell has no
    /// intrinsic sizing to contribute.
    fn min_max_width(&self) -> Option<MinMaxWidth>;
}

/// A dedicated solver for calculating table column widths.
pub struct ColumnSolver<'a> {
    columns: &'a [Option<Dimension>],
}

impl<'a> ColumnSolver<'a> {
    pub fn new(columns: &'a [Option<Dimension>]) -> Self {
        Self { columns }
    }

    /// Calculates column widths from the declared column dimensions.
    ///
    /// It handles:
    /// 1. Fixed widths (points)
    /// 2. Percentage widths (relative to `available_width` if bounded)
    /// 3. Auto widths (based on content measurement)
    pub fn resolve_widths<I, R, C>(
        &self,
        available_width: Option<f32>,
        rows: I,
    ) -> Result<Vec<f32>, LayoutError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: CellMeasure,
    {
        let num_columns = self.columns.len();
        let mut widths = vec![0.0; num_columns];
        let mut auto_indices = Vec::new();
        let table_width = available_width.unwrap_or(0.0);
        let mut remaining_width = table_width;

        let is_bounded = available_width.is_some();

        // 1. Initial assignment based on column definitions
        for (i, col) in self.columns.iter().enumerate() {
            match col {
                Some(Dimension::Pt(w)) => {
                    widths[i] = *w;
                    remaining_width -= *w;
                }
                Some(Dimension::Percent(p)) => {
                    if is_bounded {
                        widths[i] = (p / 100.0) * table_width;
                        remaining_width -= widths[i];
                    } else {
                        auto_indices.push(i);
                    }
                }
                Some(Dimension::Auto) | None => auto_indices.push(i),
            }
        }
        remaining_width = remaining_width.max(0.0);

        // If no auto columns, we are done
        if auto_indices.is_empty() {
            return Ok(widths);
        }

        // 2. Measure content for auto columns
        let mut preferred_widths: Vec<f32> = vec![0.0f32; num_columns];

        // Limit sampling to avoid a performance cliff on massive tables
        const AUTO_LAYOUT_SAMPLE_LIMIT: usize = 100;

        for (row_index, row) in rows.into_iter().enumerate() {
            if row_index >= AUTO_LAYOUT_SAMPLE_LIMIT {
                log::trace!("column measurement sampled the first {AUTO_LAYOUT_SAMPLE_LIMIT} rows");
                break;
            }

            let mut col_cursor = 0;
            for cell in row {
                let colspan = cell.colspan();
                if col_cursor + colspan > num_columns {
                    return Err(LayoutError::GridMismatch(
                        row_index,
                        col_cursor + colspan,
                        num_columns,
                    ));
                }

                // Only measure if this cell spans an auto column
                let involves_auto_col =
                    (col_cursor..(col_cursor + colspan)).any(|idx| auto_indices.contains(&idx));

                if involves_auto_col {
                    // Spanning cells are hard to attribute; only single-column
                    // cells dictate a column's preferred width.
                    if colspan == 1 {
                        if let Some(cell_widths) = cell.min_max_width() {
                            preferred_widths[col_cursor] =
                                preferred_widths[col_cursor].max(cell_widths.max_content);
                        }
                    }
                }
                col_cursor += colspan;
            }
        }

        // 3. Distribute remaining space
        let total_preferred: f32 = auto_indices.iter().map(|&i| preferred_widths[i]).sum();

        if !is_bounded {
            // Unbounded: just use preferred widths for auto columns
            for &i in &auto_indices {
                widths[i] = preferred_widths[i];
            }
        } else if total_preferred > 0.0 {
            if remaining_width >= total_preferred {
                // Expand: distribute extra space proportionally
                let extra_space = remaining_width - total_preferred;
                for &i in &auto_indices {
                    widths[i] =
                        preferred_widths[i] + extra_space * (preferred_widths[i] / total_preferred);
                }
            } else {
                // Shrink: scale down proportionally to fit
                let shrink_factor = remaining_width / total_preferred;
                for &i in &auto_indices {
                    widths[i] = preferred_widths[i] * shrink_factor;
                }
            }
        } else {
            // No preferred width at all, distribute remaining space evenly
            let width_per_auto = remaining_width / auto_indices.len() as f32;
            for i in auto_indices {
                widths[i] = width_per_auto;
            }
        }

        Ok(widths)
    }
}

/// Intrinsic width of one row: cells stack along the width axis, so both
/// bounds accumulate.
pub fn row_min_max<I, C>(cells: I) -> MinMaxWidth
where
    I: IntoIterator<Item = C>,
    C: CellMeasure,
{
    let mut result = MinMaxWidth::default();
    let mut aggregator = WidthAggregator::stacked(&mut result);
    for cell in cells {
        aggregator.update_from_child(cell.min_max_width().as_ref());
    }
    result
}

/// Intrinsic width of a whole grid: the widest row bounds, element-wise.
pub fn grid_min_max<I, R, C>(rows: I) -> MinMaxWidth
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: CellMeasure,
{
    let mut result = MinMaxWidth::default();
    for row in rows {
        let row_bounds = row_min_max(row);
        result.min_content = result.min_content.max(row_bounds.min_content);
        result.max_content = result.max_content.max(row_bounds.max_content);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubCell {
        colspan: usize,
        widths: Option<MinMaxWidth>,
    }

    impl StubCell {
        fn sized(min: f32, max: f32) -> Self {
            Self {
                colspan: 1,
                widths: Some(MinMaxWidth::new(min, max)),
            }
        }

        fn empty() -> Self {
            Self {
                colspan: 1,
                widths: None,
            }
        }

        fn spanning(colspan: usize) -> Self {
            Self {
                colspan,
                widths: Some(MinMaxWidth::exact(10.0)),
            }
        }
    }

    impl CellMeasure for &StubCell {
        fn colspan(&self) -> usize {
            self.colspan
        }

        fn min_max_width(&self) -> Option<MinMaxWidth> {
            self.widths
        }
    }

    #[test]
    fn fixed_and_percent_columns_resolve_without_measurement() {
        let columns = [
            Some(Dimension::Pt(50.0)),
            Some(Dimension::Percent(25.0)),
            Some(Dimension::Pt(30.0)),
        ];
        let solver = ColumnSolver::new(&columns);

        let rows: Vec<Vec<&StubCell>> = Vec::new();
        let widths = solver.resolve_widths(Some(200.0), rows).unwrap();
        assert_eq!(widths, vec![50.0, 50.0, 30.0]);
    }

    #[test]
    fn auto_columns_share_leftover_space_by_preference() {
        let columns = [Some(Dimension::Pt(40.0)), None, None];
        let solver = ColumnSolver::new(&columns);

        let row = [
            StubCell::sized(10.0, 20.0),
            StubCell::sized(20.0, 60.0),
            StubCell::sized(15.0, 20.0),
        ];
        // 40pt fixed leaves 120pt for 80pt of preference: 40pt extra
        // distributed 3:1.
        let widths = solver
            .resolve_widths(Some(160.0), vec![row.iter()])
            .unwrap();

        assert_eq!(widths[0], 40.0);
        assert!((widths[1] - 90.0).abs() < 0.01);
        assert!((widths[2] - 30.0).abs() < 0.01);
    }

    #[test]
    fn overflowing_preferences_shrink_proportionally() {
        let columns = [None, None];
        let solver = ColumnSolver::new(&columns);

        let row = [StubCell::sized(10.0, 80.0), StubCell::sized(10.0, 120.0)];
        let widths = solver
            .resolve_widths(Some(100.0), vec![row.iter()])
            .unwrap();

        assert!((widths[0] - 40.0).abs() < 0.01);
        assert!((widths[1] - 60.0).abs() < 0.01);
    }

    #[test]
    fn unbounded_tables_take_preferred_widths() {
        let columns = [None, None];
        let solver = ColumnSolver::new(&columns);

        let row = [StubCell::sized(10.0, 35.0), StubCell::empty()];
        let widths = solver.resolve_widths(None, vec![row.iter()]).unwrap();

        assert_eq!(widths, vec![35.0, 0.0]);
    }

    #[test]
    fn overflowing_colspan_is_a_grid_mismatch() {
        let columns = [None, None];
        let solver = ColumnSolver::new(&columns);

        let row = [StubCell::spanning(3)];
        let result = solver.resolve_widths(Some(100.0), vec![row.iter()]);
        assert!(matches!(result, Err(LayoutError::GridMismatch(0, 3, 2))));
    }

    #[test]
    fn row_bounds_stack_and_grid_bounds_take_the_widest_row() {
        let wide_row = [StubCell::sized(10.0, 40.0), StubCell::sized(20.0, 50.0)];
        let narrow_row = [StubCell::sized(5.0, 15.0), StubCell::empty()];

        assert_eq!(row_min_max(wide_row.iter()), MinMaxWidth::new(30.0, 90.0));

        let grid = grid_min_max(vec![wide_row.iter(), narrow_row.iter()]);
        assert_eq!(grid, MinMaxWidth::new(30.0, 90.0));
    }
}
