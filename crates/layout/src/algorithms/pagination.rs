//! Page-bound area management for a root layout pass.
//!
//! The root lays pages forward; when a float reservation lands on a page
//! that is already laid out, the pass rewinds to that page once, reruns it
//! around the reservation, and restores forward progress. The cursor
//! history needed for that cycle is a depth-1 undo/redo slot, not a general
//! stack: float-driven backward reflow is a single bounded correction.

use crate::interface::LayoutResult;
use folio_style::dimension::{Margins, PageSize};
use folio_types::geometry::Rect;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

impl BreakAnalysis {
    /// Classifies the attempt for the caller's result signaling.
    pub fn outcome(&self, anything_placed: bool) -> LayoutResult {
        if !self.should_break {
            LayoutResult::Finished
        } else if anything_placed {
            LayoutResult::Partial
        } else {
            LayoutResult::Nothing
        }
    }
}

/// Centralized logic to check if a child fits in the remaining space.
///
/// * `cursor_y`: The current Y position relative to the top of the container bounds.
/// * `child_height`: The required height for the child.
/// * `bounds`: The bounds of the current container.
pub fn check_child_fit(cursor_y: f32, child_height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.height - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}

/// The page a root pass is currently filling.
#[derive(Debug, Clone, PartialEq)]
pub struct PageArea {
    pub page_index: usize,
    pub content: Rect,
}

/// Live position of a root layout pass: the page being filled plus the
/// regions floats have reserved on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    pub area: PageArea,
    pub float_reservations: Vec<Rect>,
}

impl PageCursor {
    pub fn new(area: PageArea) -> Self {
        Self {
            area,
            float_reservations: Vec::new(),
        }
    }

    /// Reserves a region for floated content. Reserving the same region
    /// twice keeps a single entry.
    pub fn reserve_float(&mut self, region: Rect) {
        if !self.float_reservations.contains(&region) {
            self.float_reservations.push(region);
        }
    }

    /// Whether `region` overlaps any reserved float area.
    pub fn intrudes_on_float(&self, region: &Rect) -> bool {
        self.float_reservations
            .iter()
            .any(|reserved| reserved.intersects(region))
    }

    /// Width remaining at height `y` once reservations are subtracted from
    /// the content band `[y, y + height)`.
    pub fn clear_width_at(&self, y: f32, height: f32) -> f32 {
        let band = Rect::new(self.area.content.x, y, self.area.content.width, height);
        let reserved: f32 = self
            .float_reservations
            .iter()
            .filter(|r| r.intersects(&band))
            .map(|r| r.width)
            .sum();
        (self.area.content.width - reserved).max(0.0)
    }
}

/// Depth-1 cursor history for one root layout pass.
///
/// `store_previous_state` snapshots the cursor a backward jump may return
/// to; `attempt_go_back_and_store_next` consumes it while remembering where
/// forward progress had reached; `attempt_go_forward` consumes that in
/// turn. Calling any of them out of order does nothing and reports `false`
/// — backward reflow is best-effort, so an empty slot is a normal outcome.
#[derive(Debug, Default)]
pub struct PaginationStateStack {
    previous: Option<PageCursor>,
    next: Option<PageCursor>,
}

impl PaginationStateStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the live cursor as the rewind target, replacing any stale
    /// snapshot.
    pub fn store_previous_state(&mut self, cursor: &PageCursor) {
        self.previous = Some(cursor.clone());
    }

    /// Moves the live cursor back to the stored snapshot, keeping the
    /// pre-move cursor so the pass can return to it. Reports whether a
    /// snapshot existed; without one the cursor is left untouched.
    pub fn attempt_go_back_and_store_next(&mut self, cursor: &mut PageCursor) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.next = Some(std::mem::replace(cursor, previous));
                true
            }
            None => false,
        }
    }

    /// Moves the live cursor forward to where the pass had reached before
    /// the last backward jump. Reports whether such a position was stored.
    pub fn attempt_go_forward(&mut self, cursor: &mut PageCursor) -> bool {
        match self.next.take() {
            Some(next) => {
                *cursor = next;
                true
            }
            None => false,
        }
    }
}

/// Drives one layout pass across pages: owns the live cursor and its
/// history, hands out fresh page areas, and runs the float revisit cycle.
pub struct RootPass {
    cursor: PageCursor,
    history: PaginationStateStack,
    page_content: Rect,
}

impl RootPass {
    pub fn new(page: PageSize, margins: Margins) -> Self {
        let (width, height) = page.dimensions_pt();
        let content = Rect::new(
            margins.left,
            margins.top,
            width - margins.left - margins.right,
            height - margins.top - margins.bottom,
        );
        Self {
            cursor: PageCursor::new(PageArea {
                page_index: 0,
                content,
            }),
            history: PaginationStateStack::new(),
            page_content: content,
        }
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut PageCursor {
        &mut self.cursor
    }

    /// Marks the current cursor as the position a float-driven rewind may
    /// return to. Call once per page before laying its content.
    pub fn checkpoint(&mut self) {
        self.history.store_previous_state(&self.cursor);
    }

    /// Moves to the next page with a fresh content area. Reservations
    /// belong to their page and do not carry over.
    pub fn advance_page(&mut self) {
        let next_index = self.cursor.area.page_index + 1;
        self.cursor = PageCursor::new(PageArea {
            page_index: next_index,
            content: self.page_content,
        });
    }

    pub fn reserve_float(&mut self, region: Rect) {
        self.cursor.reserve_float(region);
    }

    /// Rewinds to the last checkpoint so the page can be laid out again
    /// around new float reservations.
    pub fn rewind_for_floats(&mut self) -> bool {
        let moved = self.history.attempt_go_back_and_store_next(&mut self.cursor);
        if moved {
            log::debug!(
                "rewinding to page {} for float reflow",
                self.cursor.area.page_index
            );
        }
        moved
    }

    /// Restores the forward position saved by the last rewind.
    pub fn resume_forward(&mut self) -> bool {
        self.history.attempt_go_forward(&mut self.cursor)
    }
}
