// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Per-side adjustment applied to the element rectangle before visibility math.
///
/// The stored form is directly addable to the element's edges: `left`/`top`
/// hold the *negated* configured value, `right`/`bottom` the configured value
/// as given. Configuring a single positive number `N` therefore stores
/// `left = top = -N`, `right = bottom = N`, which moves every edge outward and
/// grows the effective element by `N` on each side. Negative configured values
/// act as an inset.
///
/// Update the stored values through [`Offset::update`]; construction via
/// [`Offset::default`] starts from all-zero (no adjustment).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    /// Stored left adjustment (negated configured value).
    pub left: f64,
    /// Stored top adjustment (negated configured value).
    pub top: f64,
    /// Stored right adjustment (configured value as given).
    pub right: f64,
    /// Stored bottom adjustment (configured value as given).
    pub bottom: f64,
}

impl Offset {
    /// Returns `rect` with each edge moved by the stored adjustment.
    ///
    /// Width and height of the result derive from the adjusted edges, so a
    /// uniform configured offset `N` grows both extents by `2 * N`.
    #[must_use]
    pub fn adjust(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }

    /// Updates the stored adjustments from a configuration value.
    ///
    /// A [`Uniform`](OffsetInput::Uniform) number sets all four sides
    /// symmetrically. A [`PerSide`](OffsetInput::PerSide) input updates only
    /// the fields it carries; absent or non-finite fields leave the previous
    /// stored value untouched. Invalid input never errors.
    pub fn update(&mut self, input: impl Into<OffsetInput>) {
        match input.into() {
            OffsetInput::Uniform(n) => {
                if n.is_finite() {
                    self.left = -n;
                    self.top = -n;
                    self.right = n;
                    self.bottom = n;
                }
            }
            OffsetInput::PerSide(sides) => {
                if let Some(v) = sides.left.filter(|v| v.is_finite()) {
                    self.left = -v;
                }
                if let Some(v) = sides.top.filter(|v| v.is_finite()) {
                    self.top = -v;
                }
                if let Some(v) = sides.right.filter(|v| v.is_finite()) {
                    self.right = v;
                }
                if let Some(v) = sides.bottom.filter(|v| v.is_finite()) {
                    self.bottom = v;
                }
            }
        }
    }
}

/// Offset configuration in configured (non-negated) values.
///
/// Callers decide the shape up front instead of duck-typing the argument: a
/// bare number expands all four sides symmetrically, a [`PartialOffset`]
/// updates individual sides. Both convert via [`From`], so setters can accept
/// `impl Into<OffsetInput>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OffsetInput {
    /// One number for all four sides (positive expands outward).
    Uniform(f64),
    /// Individual sides; `None` fields keep their previous value.
    PerSide(PartialOffset),
}

impl From<f64> for OffsetInput {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<PartialOffset> for OffsetInput {
    fn from(value: PartialOffset) -> Self {
        Self::PerSide(value)
    }
}

/// Per-side offset values in configured (non-negated) form.
///
/// Each field is optional; absent fields are a partial update and keep the
/// previously stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialOffset {
    /// Configured left offset (positive expands leftward).
    pub left: Option<f64>,
    /// Configured top offset (positive expands upward).
    pub top: Option<f64>,
    /// Configured right offset (positive expands rightward).
    pub right: Option<f64>,
    /// Configured bottom offset (positive expands downward).
    pub bottom: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::{Offset, PartialOffset};
    use kurbo::Rect;

    #[test]
    fn uniform_offset_negates_near_sides() {
        let mut offset = Offset::default();
        offset.update(10.0);
        assert_eq!(
            offset,
            Offset {
                left: -10.0,
                top: -10.0,
                right: 10.0,
                bottom: 10.0,
            }
        );
    }

    #[test]
    fn uniform_equals_four_sided() {
        let mut uniform = Offset::default();
        uniform.update(7.5);

        let mut per_side = Offset::default();
        per_side.update(PartialOffset {
            left: Some(7.5),
            top: Some(7.5),
            right: Some(7.5),
            bottom: Some(7.5),
        });

        assert_eq!(uniform, per_side);
    }

    #[test]
    fn partial_update_keeps_other_sides() {
        let mut offset = Offset::default();
        offset.update(5.0);
        offset.update(PartialOffset {
            top: Some(10.0),
            ..PartialOffset::default()
        });

        // Round-trip: top stores the negated configured value, the rest is
        // whatever the earlier uniform update left behind.
        assert_eq!(
            offset,
            Offset {
                left: -5.0,
                top: -10.0,
                right: 5.0,
                bottom: 5.0,
            }
        );
    }

    #[test]
    fn non_finite_fields_are_ignored() {
        let mut offset = Offset::default();
        offset.update(3.0);

        offset.update(f64::NAN);
        offset.update(PartialOffset {
            left: Some(f64::INFINITY),
            right: Some(f64::NAN),
            bottom: Some(1.0),
            ..PartialOffset::default()
        });

        assert_eq!(
            offset,
            Offset {
                left: -3.0,
                top: -3.0,
                right: 3.0,
                bottom: 1.0,
            }
        );
    }

    #[test]
    fn adjust_grows_rect_outward_for_positive_offset() {
        let mut offset = Offset::default();
        offset.update(10.0);

        let rect = offset.adjust(Rect::new(100.0, 100.0, 300.0, 300.0));
        assert_eq!(rect, Rect::new(90.0, 90.0, 310.0, 310.0));
        assert_eq!(rect.width(), 220.0);
        assert_eq!(rect.height(), 220.0);
    }

    #[test]
    fn negative_offset_insets() {
        let mut offset = Offset::default();
        offset.update(-10.0);

        let rect = offset.adjust(Rect::new(100.0, 100.0, 300.0, 300.0));
        assert_eq!(rect, Rect::new(110.0, 110.0, 290.0, 290.0));
    }
}
