// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::metrics::{Axis, AxisPair, axis_percent, axis_progress};
use crate::offset::{Offset, OffsetInput};
use crate::position::{Edges, edge_position, is_visible};

/// Full visibility snapshot for one tracked element.
///
/// Produced by [`VisibilityTracker::recompute`] and replaced wholesale on
/// every recompute; fields are never patched individually. `percent` and
/// `progress` components are always finite and within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibilityState {
    /// Which element edges lie inside the container.
    pub position: Edges,
    /// Whether the element counts as visible under the configured policy.
    pub visible: bool,
    /// Fraction of the element inside the container, per axis.
    pub percent: AxisPair,
    /// Travel through the container's traversal range, per axis.
    pub progress: AxisPair,
}

/// Per-element visibility engine.
///
/// Owns the element's [`Offset`], the visibility policy flags, and the last
/// computed [`VisibilityState`]. [`VisibilityTracker::recompute`] derives a
/// fresh state from a container/element rectangle pair; every accessor is a
/// pure projection of that last snapshot and never triggers recomputation.
///
/// One tracker instance is created per tracked element when tracking begins
/// and dropped when tracking is torn down; the tracker itself holds no
/// registry of elements and no reference to any host event system.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    offset: Offset,
    partially_visible: bool,
    ignore_overflow: bool,
    state: VisibilityState,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            partially_visible: true,
            ignore_overflow: false,
            state: VisibilityState::default(),
        }
    }
}

impl VisibilityTracker {
    /// Creates a tracker with the default policy: any overlap counts as
    /// visible (`partially_visible = true`), overflow reports the exact ratio
    /// (`ignore_overflow = false`), no offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether any overlap counts as visible (`true`) or whether full
    /// containment is required (`false`).
    pub fn set_partially_visible(&mut self, enabled: bool) {
        self.partially_visible = enabled;
    }

    /// Returns the current visibility policy.
    #[must_use]
    pub fn partially_visible(&self) -> bool {
        self.partially_visible
    }

    /// Sets whether an element larger than the container reports percent `1`
    /// instead of the exact overflow ratio.
    pub fn set_ignore_overflow(&mut self, enabled: bool) {
        self.ignore_overflow = enabled;
    }

    /// Returns the current overflow policy.
    #[must_use]
    pub fn ignore_overflow(&self) -> bool {
        self.ignore_overflow
    }

    /// Updates the element offset; applied on the next recompute.
    ///
    /// Accepts a bare number (all four sides) or a
    /// [`PartialOffset`](crate::PartialOffset); invalid fields are ignored per
    /// field and never error.
    pub fn set_offset(&mut self, input: impl Into<OffsetInput>) {
        self.offset.update(input);
    }

    /// Returns the stored offset (`left`/`top` in negated stored form).
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Recomputes the visibility state from fresh rectangles.
    ///
    /// Pipeline: apply offset to the element → per-edge position → visibility
    /// under the configured policy → percent per axis → progress per axis.
    /// The new snapshot replaces the previous one and is also returned.
    /// Calling this twice with identical rectangles and an unchanged offset
    /// yields an identical state.
    pub fn recompute(&mut self, container: Rect, element: Rect) -> &VisibilityState {
        let element = self.offset.adjust(element);
        let position = edge_position(container, element);
        let visible = is_visible(container, element, position, self.partially_visible);
        let percent = AxisPair {
            x: axis_percent(
                element.x0 - container.x0,
                element.x1 - container.x0,
                position.left(),
                position.right(),
                container.width(),
                element.width(),
                self.ignore_overflow,
            ),
            y: axis_percent(
                element.y0 - container.y0,
                element.y1 - container.y0,
                position.top(),
                position.bottom(),
                container.height(),
                element.height(),
                self.ignore_overflow,
            ),
        };
        let progress = AxisPair {
            x: axis_progress(element.x1, container.x0, container.width(), element.width()),
            y: axis_progress(element.y1, container.y0, container.height(), element.height()),
        };

        self.state = VisibilityState {
            position,
            visible,
            percent,
            progress,
        };
        &self.state
    }

    /// Returns the last computed state.
    #[must_use]
    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    /// Returns the last computed visible boolean.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.state.visible
    }

    /// Returns the last computed percent for one axis.
    #[must_use]
    pub fn percent(&self, axis: Axis) -> f64 {
        self.state.percent.get(axis)
    }

    /// Returns the last computed percent for both axes.
    #[must_use]
    pub fn percent_xy(&self) -> AxisPair {
        self.state.percent
    }

    /// Returns the last computed progress for one axis.
    #[must_use]
    pub fn progress(&self, axis: Axis) -> f64 {
        self.state.progress.get(axis)
    }

    /// Returns the last computed progress for both axes.
    #[must_use]
    pub fn progress_xy(&self) -> AxisPair {
        self.state.progress
    }
}
