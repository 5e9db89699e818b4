// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Supplies current geometry for one tracked element and its container.
///
/// Implementations query the host layout engine (or return cached values) on
/// demand; the watcher calls both methods once per recompute. Both rectangles
/// must live in the same coordinate space, conventionally container-relative
/// screen coordinates. For a whole-window container, return
/// [`viewport_rect`] from [`container_rect`](Self::container_rect).
pub trait RectSource {
    /// The container's current bounding rectangle.
    fn container_rect(&self) -> Rect;

    /// The element's current bounding rectangle (before any offset).
    fn element_rect(&self) -> Rect;
}

/// Synthesizes the bounding rectangle of a whole-window container.
///
/// Windows have no bounding rectangle of their own, so hosts tracking against
/// the viewport build one anchored at the origin with the viewport's size.
#[must_use]
pub fn viewport_rect(width: f64, height: f64) -> Rect {
    Rect::new(0.0, 0.0, width, height)
}

#[cfg(test)]
mod tests {
    use super::viewport_rect;

    #[test]
    fn viewport_rect_is_origin_anchored() {
        let rect = viewport_rect(1024.0, 768.0);
        assert_eq!(rect.x0, 0.0);
        assert_eq!(rect.y0, 0.0);
        assert_eq!(rect.width(), 1024.0);
        assert_eq!(rect.height(), 768.0);
    }
}
