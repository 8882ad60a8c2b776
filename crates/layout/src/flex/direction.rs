//! Main-axis direction strategies for flex containers.
//!
//! The line layout algorithm is direction-agnostic; which physical direction
//! the main axis runs is decided here, once per container, from its declared
//! flow. Items are then always placed with an ascending cursor (left-to-right
//! or top-to-bottom), so a strategy expresses its direction purely through
//! item order and shift placement.

use super::{FlexItem, FlexLine};
use folio_style::flex::{FlexDirection, JustifyContent};

pub trait MainAxisDirector {
    /// Flattens all lines into the order items must be laid out in,
    /// reordering items within each line first where the direction demands
    /// it. Returns `None` when the direction does not support flattening
    /// yet; that is distinct from a container with no items.
    fn arrange(&self, lines: Vec<FlexLine>) -> Option<Vec<FlexItem>>;

    /// Reorders one line in place.
    fn order_line(&self, line: &mut FlexLine);

    /// Writes the main-axis shift satisfying `justify` onto exactly one item
    /// of the document-ordered line. `free_space` is the container's main
    /// size minus the line's item sizes and is non-negative by construction
    /// upstream.
    fn align_line(&self, line: &mut FlexLine, justify: JustifyContent, free_space: f32);
}

/// Selects the strategy for a container's declared flow. Both vertical flows
/// share the column strategy.
pub fn director_for(direction: FlexDirection) -> &'static dyn MainAxisDirector {
    match direction {
        FlexDirection::Row => &RowDirector,
        FlexDirection::RowReverse => &RowReverseDirector,
        FlexDirection::Column | FlexDirection::ColumnReverse => &ColumnDirector,
    }
}

/// Left-to-right flow: document order is placement order.
pub struct RowDirector;

impl MainAxisDirector for RowDirector {
    fn arrange(&self, lines: Vec<FlexLine>) -> Option<Vec<FlexItem>> {
        Some(lines.into_iter().flat_map(|line| line.items).collect())
    }

    fn order_line(&self, _line: &mut FlexLine) {}

    fn align_line(&self, line: &mut FlexLine, justify: JustifyContent, free_space: f32) {
        debug_assert!(free_space >= 0.0);
        let Some(first) = line.items.first_mut() else {
            return;
        };
        match justify {
            JustifyContent::End
            | JustifyContent::SelfEnd
            | JustifyContent::FlexEnd
            | JustifyContent::Right => first.main_shift = free_space,
            JustifyContent::Center => first.main_shift = free_space / 2.0,
            _ => {}
        }
    }
}

/// Right-to-left flow: each line is reversed before placement, so the
/// document-last item is placed first. The shift therefore goes on the
/// document-last item, and `flex-end` — which names this flow's own start
/// edge — applies no shift.
pub struct RowReverseDirector;

impl MainAxisDirector for RowReverseDirector {
    fn arrange(&self, lines: Vec<FlexLine>) -> Option<Vec<FlexItem>> {
        Some(
            lines
                .into_iter()
                .flat_map(|mut line| {
                    self.order_line(&mut line);
                    line.items
                })
                .collect(),
        )
    }

    fn order_line(&self, line: &mut FlexLine) {
        line.items.reverse();
    }

    fn align_line(&self, line: &mut FlexLine, justify: JustifyContent, free_space: f32) {
        debug_assert!(free_space >= 0.0);
        let Some(last) = line.items.last_mut() else {
            return;
        };
        match justify {
            JustifyContent::End | JustifyContent::SelfEnd | JustifyContent::Right => {
                last.main_shift = free_space
            }
            JustifyContent::Center => last.main_shift = free_space / 2.0,
            _ => {}
        }
    }
}

/// Top-to-bottom flow. Alignment behaves like the forward strategy; line
/// flattening is not implemented for vertical flows yet, so `arrange`
/// reports the gap instead of inventing an order.
pub struct ColumnDirector;

impl MainAxisDirector for ColumnDirector {
    fn arrange(&self, _lines: Vec<FlexLine>) -> Option<Vec<FlexItem>> {
        None
    }

    fn order_line(&self, _line: &mut FlexLine) {}

    fn align_line(&self, line: &mut FlexLine, justify: JustifyContent, free_space: f32) {
        RowDirector.align_line(line, justify, free_space);
    }
}
