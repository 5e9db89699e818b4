// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percent and progress formulas, per axis.
//!
//! Both metrics are pure functions of one axis of the container/element pair
//! and always land in `[0, 1]`. Percent measures how much of the element's
//! extent is currently inside the container; progress measures how far the
//! element has traveled through the container's traversal range, independent
//! of whether it is visible at all.

/// Axis selector for single-axis queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal (left/right) axis.
    X,
    /// Vertical (top/bottom) axis.
    Y,
}

/// A per-axis pair of values, used for percent and progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPair {
    /// Value on the horizontal axis.
    pub x: f64,
    /// Value on the vertical axis.
    pub y: f64,
}

impl AxisPair {
    /// Returns the value for the given axis.
    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Fraction of the element's extent inside the container on one axis.
///
/// `elem_near`/`elem_far` are the element's edges relative to the container's
/// near edge on this axis; `near_in`/`far_in` are the matching edge-in-view
/// flags from [`edge_position`](crate::edge_position). Three regimes:
///
/// - exactly one edge in view: the visible fraction of the element extent,
///   measured from the container boundary the visible edge has crossed;
/// - both edges in view: `1`;
/// - neither edge in view but the element spans the whole container extent:
///   the exact overflow ratio `container_extent / elem_extent`, or `1` when
///   `ignore_overflow` is set;
/// - otherwise (not visible on this axis): `0`.
///
/// A zero or negative extent on either side short-circuits to `0` so the
/// division can never produce NaN or infinity. The result is clamped to
/// `[0, 1]`.
#[must_use]
pub fn axis_percent(
    elem_near: f64,
    elem_far: f64,
    near_in: bool,
    far_in: bool,
    container_extent: f64,
    elem_extent: f64,
    ignore_overflow: bool,
) -> f64 {
    if elem_extent <= 0.0 || container_extent <= 0.0 {
        return 0.0;
    }
    let raw = match (near_in, far_in) {
        // Near edge visible, element continues past the far boundary.
        (true, false) => (container_extent - elem_near) / elem_extent,
        // Far edge visible, element comes in from before the near boundary.
        (false, true) => elem_far / elem_extent,
        (true, true) => 1.0,
        (false, false) => {
            if elem_near < 0.0 && elem_far >= container_extent {
                if ignore_overflow {
                    1.0
                } else {
                    container_extent / elem_extent
                }
            } else {
                0.0
            }
        }
    };
    raw.clamp(0.0, 1.0)
}

/// Linear travel metric for one axis, in `[0, 1]`.
///
/// `0` when the element's trailing (far) edge has just reached the container's
/// leading (near) edge; `1` when the trailing edge has fully exited past the
/// container's trailing edge. Unlike percent this is independent of the
/// visibility boolean and moves linearly over the whole traversal range
/// `container_extent + elem_extent`.
#[must_use]
pub fn axis_progress(
    elem_far: f64,
    container_near: f64,
    container_extent: f64,
    elem_extent: f64,
) -> f64 {
    let range = container_extent + elem_extent;
    if range <= 0.0 {
        return 0.0;
    }
    ((elem_far - container_near) / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisPair, axis_percent, axis_progress};

    #[test]
    fn axis_pair_get_selects_component() {
        let pair = AxisPair { x: 0.25, y: 0.75 };
        assert_eq!(pair.get(Axis::X), 0.25);
        assert_eq!(pair.get(Axis::Y), 0.75);
    }

    #[test]
    fn both_edges_in_view_is_full() {
        assert_eq!(axis_percent(100.0, 300.0, true, true, 1000.0, 200.0, false), 1.0);
    }

    #[test]
    fn near_edge_only_measures_from_far_boundary() {
        // Element enters from the far side: near edge at 900 in a 1000-wide
        // container, extent 200, so half of it is inside.
        assert_eq!(axis_percent(900.0, 1100.0, true, false, 1000.0, 200.0, false), 0.5);
    }

    #[test]
    fn far_edge_only_measures_from_near_boundary() {
        // Element leaves past the near side: far edge at 50, extent 200.
        assert_eq!(axis_percent(-150.0, 50.0, false, true, 1000.0, 200.0, false), 0.25);
    }

    #[test]
    fn spanning_element_reports_overflow_ratio() {
        let ratio = axis_percent(-100.0, 1200.0, false, false, 1000.0, 1300.0, false);
        assert!((ratio - 1000.0 / 1300.0).abs() < 1e-12);
    }

    #[test]
    fn spanning_element_with_ignore_overflow_is_full() {
        assert_eq!(axis_percent(-100.0, 1200.0, false, false, 1000.0, 1300.0, true), 1.0);
    }

    #[test]
    fn off_axis_element_is_zero() {
        assert_eq!(axis_percent(1500.0, 1700.0, false, false, 1000.0, 200.0, false), 0.0);
    }

    #[test]
    fn zero_extents_yield_zero_not_nan() {
        assert_eq!(axis_percent(0.0, 0.0, true, false, 1000.0, 0.0, false), 0.0);
        assert_eq!(axis_percent(0.0, 200.0, true, false, 0.0, 200.0, false), 0.0);
        assert_eq!(axis_progress(100.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn percent_is_clamped_to_unit_interval() {
        // A visible near edge before the container start would over-count
        // without the clamp.
        let p = axis_percent(-0.0, 1100.0, true, false, 1000.0, 100.0, false);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn progress_endpoints() {
        // Trailing edge at the container's leading edge.
        assert_eq!(axis_progress(0.0, 0.0, 800.0, 200.0), 0.0);
        // Trailing edge fully past the container's trailing edge.
        assert_eq!(axis_progress(1000.0, 0.0, 800.0, 200.0), 1.0);
        // Halfway through the traversal range.
        assert_eq!(axis_progress(500.0, 0.0, 800.0, 200.0), 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(axis_progress(-500.0, 0.0, 800.0, 200.0), 0.0);
        assert_eq!(axis_progress(5000.0, 0.0, 800.0, 200.0), 1.0);
    }
}
