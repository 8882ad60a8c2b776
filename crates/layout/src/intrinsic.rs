//! Bottom-up propagation of intrinsic (min/max content) widths.

/// The narrowest and widest a box can be without breaking its content,
/// as reported to its parent during measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MinMaxWidth {
    pub min_content: f32,
    pub max_content: f32,
}

impl MinMaxWidth {
    pub fn new(min_content: f32, max_content: f32) -> Self {
        assert!(
            min_content <= max_content,
            "min content width {min_content} exceeds max content width {max_content}"
        );
        Self {
            min_content,
            max_content,
        }
    }

    pub fn exact(width: f32) -> Self {
        Self {
            min_content: width,
            max_content: width,
        }
    }
}

/// How children contribute to the parent along the inline axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Children stack along the width axis: both bounds accumulate as sums.
    Stacked,
    /// Children lay out independently: the min bound is the widest child
    /// minimum, the max bound remains a running sum.
    Parallel,
}

/// Accumulates children's intrinsic widths into one parent target.
///
/// An aggregator is bound to exactly one target for the duration of one
/// parent's child-iteration pass and discarded afterwards. The target
/// invariant `min_content <= max_content` is asserted after every update;
/// a violation is a defect in the caller, never clamped away.
pub struct WidthAggregator<'a> {
    target: &'a mut MinMaxWidth,
    strategy: Strategy,
}

impl<'a> WidthAggregator<'a> {
    /// Aggregator for children stacked along the size-determining axis
    /// (table cells in a row, columns across a table).
    pub fn stacked(target: &'a mut MinMaxWidth) -> Self {
        Self {
            target,
            strategy: Strategy::Stacked,
        }
    }

    /// Aggregator for children that lay out independently and constrain the
    /// parent in parallel (flex lines, overlapping tracks).
    pub fn parallel(target: &'a mut MinMaxWidth) -> Self {
        Self {
            target,
            strategy: Strategy::Parallel,
        }
    }

    pub fn update_min_child_width(&mut self, width: f32) {
        match self.strategy {
            Strategy::Stacked => self.target.min_content += width,
            Strategy::Parallel => {
                self.target.min_content = self.target.min_content.max(width);
            }
        }
        self.check();
    }

    pub fn update_max_child_width(&mut self, width: f32) {
        self.target.max_content += width;
        self.check();
    }

    /// Folds one child's contribution into the target. A child that produced
    /// no intrinsic width contributes nothing; this is a documented no-op,
    /// not a failure. The max bound is updated before the min bound.
    pub fn update_from_child(&mut self, child: Option<&MinMaxWidth>) {
        let Some(child) = child else {
            return;
        };
        self.update_max_child_width(child.max_content);
        self.update_min_child_width(child.min_content);
    }

    fn check(&self) {
        assert!(
            self.target.min_content <= self.target.max_content,
            "aggregated min content width {} exceeds max content width {}",
            self.target.min_content,
            self.target.max_content
        );
    }
}
