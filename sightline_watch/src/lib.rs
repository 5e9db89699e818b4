// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_watch --heading-base-level=0

//! Sightline Watch: the consumer-facing layer over the visibility engine.
//!
//! This crate wires a [`sightline_visibility::VisibilityTracker`] and its
//! transition machine to live geometry and user callbacks:
//!
//! - [`RectSource`]: the collaborator interface that supplies the current
//!   container and element rectangles ([`viewport_rect`] synthesizes the
//!   "whole window" container).
//! - [`WatchOptions`] / [`WatchCallbacks`]: construction-time configuration
//!   and the optional enter/leave/visible callbacks.
//! - [`Watcher`]: one instance per tracked element; recomputes on demand and
//!   dispatches callbacks with a [`VisibilityReport`] payload.
//! - [`WatchRegistry`]: an explicit keyed map of watchers for hosts that
//!   track many elements. The engine itself holds no registry; ownership of
//!   the element-to-watcher mapping lives here, at the adapter layer.
//!
//! Hosts subscribe to their platform's scroll/resize events, coalesce bursts
//! with a [`sightline_frame::FrameCoalescer`], and call
//! [`Watcher::on_trigger`] from the frame callback. All computation is
//! synchronous and bounded; nothing here blocks or runs concurrently.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use sightline_watch::{RectSource, WatchCallbacks, WatchOptions, Watcher, viewport_rect};
//!
//! struct Fixed {
//!     element: Rect,
//! }
//!
//! impl RectSource for Fixed {
//!     fn container_rect(&self) -> Rect {
//!         viewport_rect(1000.0, 800.0)
//!     }
//!     fn element_rect(&self) -> Rect {
//!         self.element
//!     }
//! }
//!
//! let source = Fixed {
//!     element: Rect::new(100.0, 100.0, 300.0, 300.0),
//! };
//! let mut watcher = Watcher::new(source, WatchOptions::default(), WatchCallbacks::default());
//! assert!(watcher.visible());
//!
//! let report = watcher.refresh();
//! assert_eq!(report.percent.unwrap().x, 1.0);
//! ```
//!
//! ## Driving from a frame loop
//!
//! ```rust
//! use kurbo::Rect;
//! use sightline_frame::{FrameCoalescer, Trigger};
//! use sightline_watch::{RectSource, WatchCallbacks, WatchOptions, Watcher, viewport_rect};
//!
//! # struct Fixed;
//! # impl RectSource for Fixed {
//! #     fn container_rect(&self) -> Rect { viewport_rect(1000.0, 800.0) }
//! #     fn element_rect(&self) -> Rect { Rect::new(0.0, 900.0, 200.0, 1100.0) }
//! # }
//! let mut watcher = Watcher::new(Fixed, WatchOptions::default(), WatchCallbacks::default());
//! let mut coalescer = FrameCoalescer::new();
//! let mut frames = 0_u32;
//!
//! // A burst of scroll events schedules a single frame.
//! coalescer.signal(Trigger::Scroll, &mut || frames += 1);
//! coalescer.signal(Trigger::Scroll, &mut || frames += 1);
//! assert_eq!(frames, 1);
//!
//! // Inside the host's frame callback:
//! if let Some(trigger) = coalescer.take() {
//!     watcher.on_trigger(trigger);
//! }
//! assert!(!watcher.visible());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod source;
mod watcher;

pub use registry::WatchRegistry;
pub use source::{RectSource, viewport_rect};
pub use watcher::{
    VisibilityReport, WatchCallback, WatchCallbacks, WatchOptions, Watcher, WatcherDebugInfo,
};
