//! Flex line grouping and main-axis placement.
//!
//! Line membership and per-item sizes are resolved by the flex sizing step
//! before anything here runs; this module owns the direction-dependent
//! ordering of items and the conversion of justification policies into
//! main-axis shifts.

pub mod direction;

pub use direction::{director_for, MainAxisDirector};

use crate::intrinsic::{MinMaxWidth, WidthAggregator};
use folio_types::geometry::Size;

/// One box assigned to a flex line, with its resolved size and the shifts
/// written by direction/justification logic.
///
/// An item is owned by exactly one [`FlexLine`] for the duration of a layout
/// pass; the owning render box is referenced by id.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexItem {
    pub box_id: usize,
    pub size: Size,
    pub main_shift: f32,
    pub cross_shift: f32,
}

impl FlexItem {
    pub fn new(box_id: usize, size: Size) -> Self {
        Self {
            box_id,
            size,
            main_shift: 0.0,
            cross_shift: 0.0,
        }
    }
}

/// An ordered run of items sharing one main-axis line, in document order
/// until a director reorders it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexLine {
    pub items: Vec<FlexItem>,
}

impl FlexLine {
    pub fn new(items: Vec<FlexItem>) -> Self {
        Self { items }
    }

    /// Sum of the item sizes along the main axis.
    pub fn main_size(&self) -> f32 {
        self.items.iter().map(|item| item.size.width).sum()
    }

    /// Leftover main-axis space inside a container of the given size.
    /// Never negative; overflowing lines report zero free space.
    pub fn free_space(&self, container_main: f32) -> f32 {
        (container_main - self.main_size()).max(0.0)
    }
}

/// Cursor-based placement: each item's shift advances the cursor before the
/// item is placed, so a shift on the first item moves the whole run.
pub fn main_axis_positions(items: &[FlexItem]) -> Vec<f32> {
    let mut cursor = 0.0;
    items
        .iter()
        .map(|item| {
            cursor += item.main_shift;
            let position = cursor;
            cursor += item.size.width;
            position
        })
        .collect()
}

/// Intrinsic width of a container whose children lay out on parallel lines:
/// the min bound is the widest child minimum, the max bound assumes a
/// single unwrapped line.
pub fn container_min_max<'a, I>(children: I) -> MinMaxWidth
where
    I: IntoIterator<Item = Option<&'a MinMaxWidth>>,
{
    let mut result = MinMaxWidth::default();
    let mut aggregator = WidthAggregator::parallel(&mut result);
    for child in children {
        aggregator.update_from_child(child);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(widths: &[f32]) -> FlexLine {
        FlexLine::new(
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| FlexItem::new(i, Size::new(*w, 10.0)))
                .collect(),
        )
    }

    #[test]
    fn free_space_is_never_negative() {
        let line = line(&[40.0, 30.0]);
        assert_eq!(line.free_space(100.0), 30.0);
        assert_eq!(line.free_space(50.0), 0.0);
    }

    #[test]
    fn positions_advance_by_size_and_shift() {
        let mut line = line(&[20.0, 30.0, 10.0]);
        line.items[0].main_shift = 15.0;

        let positions = main_axis_positions(&line.items);
        assert_eq!(positions, vec![15.0, 35.0, 65.0]);
    }

    #[test]
    fn container_bounds_combine_parallel_children() {
        let children = [MinMaxWidth::new(30.0, 60.0), MinMaxWidth::new(45.0, 50.0)];
        let result = container_min_max(children.iter().map(Some));
        assert_eq!(result, MinMaxWidth::new(45.0, 110.0));
    }
}
