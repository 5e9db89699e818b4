// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Rect;

bitflags! {
    /// Which edges of the (offset-adjusted) element lie inside the container.
    ///
    /// Each flag answers "is this specific edge of the element within the
    /// container's extent on its axis"; [`Edges::all_in_view`] is `true` iff
    /// the element is fully contained.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Edges: u8 {
        /// The element's top edge is in view.
        const TOP = 1 << 0;
        /// The element's bottom edge is in view.
        const BOTTOM = 1 << 1;
        /// The element's left edge is in view.
        const LEFT = 1 << 2;
        /// The element's right edge is in view.
        const RIGHT = 1 << 3;
    }
}

impl Edges {
    /// Returns `true` if the top edge is in view.
    #[must_use]
    pub fn top(self) -> bool {
        self.contains(Self::TOP)
    }

    /// Returns `true` if the bottom edge is in view.
    #[must_use]
    pub fn bottom(self) -> bool {
        self.contains(Self::BOTTOM)
    }

    /// Returns `true` if the left edge is in view.
    #[must_use]
    pub fn left(self) -> bool {
        self.contains(Self::LEFT)
    }

    /// Returns `true` if the right edge is in view.
    #[must_use]
    pub fn right(self) -> bool {
        self.contains(Self::RIGHT)
    }

    /// Returns `true` iff all four edges are in view (fully contained).
    #[must_use]
    pub fn all_in_view(self) -> bool {
        self.is_all()
    }
}

/// Computes which edges of `element` lie within `container`.
///
/// Each edge is tested independently: the distance from the matching container
/// edge must be on the in-view side and smaller than the container's full
/// extent on that axis. The boundary behavior is asymmetric on purpose: a
/// top/left edge exactly at the container's near edge counts as in view, a
/// bottom/right edge exactly at the far edge counts as out. Exact-edge cases
/// thus resolve deterministically.
#[must_use]
pub fn edge_position(container: Rect, element: Rect) -> Edges {
    let mut edges = Edges::empty();
    if near_edge_in_view(container.y0, element.y0, container.height()) {
        edges |= Edges::TOP;
    }
    if far_edge_in_view(container.y1, element.y1, container.height()) {
        edges |= Edges::BOTTOM;
    }
    if near_edge_in_view(container.x0, element.x0, container.width()) {
        edges |= Edges::LEFT;
    }
    if far_edge_in_view(container.x1, element.x1, container.width()) {
        edges |= Edges::RIGHT;
    }
    edges
}

fn near_edge_in_view(container_near: f64, element_near: f64, container_extent: f64) -> bool {
    let distance = container_near - element_near;
    distance <= 0.0 && distance.abs() < container_extent
}

fn far_edge_in_view(container_far: f64, element_far: f64, container_extent: f64) -> bool {
    let distance = container_far - element_far;
    distance > 0.0 && distance.abs() < container_extent
}

/// Decides whether the element counts as visible inside the container.
///
/// With `partially_visible` disabled, only full containment
/// ([`Edges::all_in_view`]) counts. With it enabled, any overlap counts:
///
/// - a corner is in view (one horizontal-axis edge and one vertical-axis
///   edge), or
/// - one of top/bottom is in view and the element spans the container's full
///   width (cut off on the X axis), or
/// - the symmetric case cut off on the Y axis, or
/// - the element is not fully contained but spans both axes at once (larger
///   than the container in both directions).
///
/// The span tests compare element edges against the container's near edge, so
/// containers not anchored at the origin behave like the window case.
#[must_use]
pub fn is_visible(container: Rect, element: Rect, position: Edges, partially_visible: bool) -> bool {
    if !partially_visible {
        return position.all_in_view();
    }

    let y_edge = position.top() || position.bottom();
    let x_edge = position.left() || position.right();
    let spans_x = spans_axis(
        element.x0 - container.x0,
        element.x1 - container.x0,
        container.width(),
    );
    let spans_y = spans_axis(
        element.y0 - container.y0,
        element.y1 - container.y0,
        container.height(),
    );

    (y_edge && x_edge)
        || (y_edge && spans_x)
        || (spans_y && x_edge)
        || (!position.all_in_view() && spans_x && spans_y)
}

/// The element covers the container's whole extent on one axis, both edges
/// past the boundary (container-relative coordinates).
fn spans_axis(element_near: f64, element_far: f64, container_extent: f64) -> bool {
    element_near < 0.0 && element_far >= container_extent
}
