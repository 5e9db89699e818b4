// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_visibility --heading-base-level=0

//! Sightline Visibility: core visibility math for scrollable containers.
//!
//! This crate provides a small, headless model of how much of an axis-aligned
//! element is visible inside a scrollable or resizable container, and how far
//! the element has traveled through the container's viewable area. It focuses
//! on:
//!
//! - [`edge_position`]: per-edge "is this edge in view" tests for the four
//!   sides of an element, independent per axis.
//! - [`is_visible`]: full-containment or any-overlap visibility policies,
//!   including elements larger than the container (cut off on one or both
//!   axes).
//! - [`axis_percent`] / [`axis_progress`]: the fraction of the element
//!   currently inside the container per axis, and a linear travel metric per
//!   axis, both always in `[0, 1]`.
//! - [`VisibilityTracker`]: a per-element engine that owns an [`Offset`] and
//!   the last computed [`VisibilityState`], and recomputes it from a fresh
//!   container/element rectangle pair.
//! - [`TransitionState`]: a two-state machine over the visible boolean that
//!   yields enter/leave events exactly once per crossing, plus a visible tick
//!   event on every visible step.
//!
//! It does **not** own any event loop, layout engine, or rendering backend.
//! Callers are expected to:
//! - Obtain container and element rectangles from their host environment.
//! - Call [`VisibilityTracker::recompute`] whenever relevant geometry changes
//!   (typically coalesced to at most once per display frame).
//! - Feed the resulting visible boolean into [`TransitionState::step`] and map
//!   the returned events onto their own notification mechanism.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use sightline_visibility::{Axis, TransitionState, VisibilityEvent, VisibilityTracker};
//!
//! // A 1000x800 viewport with an element fully inside it.
//! let container = Rect::new(0.0, 0.0, 1000.0, 800.0);
//! let element = Rect::new(100.0, 100.0, 300.0, 300.0);
//!
//! let mut tracker = VisibilityTracker::new();
//! let state = tracker.recompute(container, element);
//! assert!(state.visible);
//! assert!(state.position.all_in_view());
//! assert_eq!(tracker.percent(Axis::X), 1.0);
//!
//! // Transitions: the first visible step yields Enter followed by Visible.
//! let mut transitions = TransitionState::new();
//! let events = transitions.step(tracker.visible());
//! assert_eq!(&events[..], &[VisibilityEvent::Enter, VisibilityEvent::Visible]);
//! ```
//!
//! ## Offsets
//!
//! An [`Offset`] expands (positive) or insets (negative) the effective element
//! rectangle before any visibility math. A single number applies to all four
//! sides; a [`PartialOffset`] updates sides individually:
//!
//! ```rust
//! use sightline_visibility::{PartialOffset, VisibilityTracker};
//!
//! let mut tracker = VisibilityTracker::new();
//! // Expand the effective element by 10 on every side.
//! tracker.set_offset(10.0);
//! // Later, change only the top inset; other sides keep their values.
//! tracker.set_offset(PartialOffset {
//!     top: Some(25.0),
//!     ..PartialOffset::default()
//! });
//! ```
//!
//! ## Design notes
//!
//! - All rectangles live in one consistent coordinate space (conventionally
//!   container-relative screen coordinates); [`kurbo::Rect`] is the rectangle
//!   type throughout.
//! - Each recompute replaces the [`VisibilityState`] wholesale; reads are pure
//!   projections of the last snapshot and never trigger recomputation.
//! - Edge tests are deliberately asymmetric at exact boundaries: a near edge
//!   (top/left) coincident with the container's near edge counts as in view,
//!   a far edge (bottom/right) coincident with the far edge does not. This
//!   keeps exact-edge cases deterministic.
//! - Zero-extent containers or elements yield `0` percent/progress on that
//!   axis rather than NaN.
//! - The engine cannot fail: invalid offset fields are ignored per field and
//!   no operation returns an error.
//!
//! This crate is `no_std`.

#![no_std]

mod events;
mod metrics;
mod offset;
mod position;
mod tracker;

pub use events::{TransitionState, VisibilityEvent, VisibilityEvents};
pub use metrics::{Axis, AxisPair, axis_percent, axis_progress};
pub use offset::{Offset, OffsetInput, PartialOffset};
pub use position::{Edges, edge_position, is_visible};
pub use tracker::{VisibilityState, VisibilityTracker};
