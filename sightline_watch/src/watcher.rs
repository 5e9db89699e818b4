// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use sightline_frame::Trigger;
use sightline_visibility::{
    Axis, AxisPair, Edges, Offset, OffsetInput, TransitionState, VisibilityEvent, VisibilityState,
    VisibilityTracker,
};

use crate::source::RectSource;

/// Construction-time configuration for a [`Watcher`].
///
/// All fields are optional in spirit; [`WatchOptions::default`] gives the
/// conventional behavior (report everything, any overlap counts as visible).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    /// Include `percent` in callback payloads.
    pub percent_visible: bool,
    /// Include `progress` in callback payloads.
    pub percent_progress: bool,
    /// Report percent `1` instead of the exact ratio for overflowing elements.
    pub ignore_overflow: bool,
    /// Any overlap counts as visible; otherwise full containment is required.
    pub partially_visible: bool,
    /// Initial element offset.
    pub offset: OffsetInput,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            percent_visible: true,
            percent_progress: true,
            ignore_overflow: false,
            partially_visible: true,
            offset: OffsetInput::Uniform(0.0),
        }
    }
}

/// A notification callback, receiving the report for the tick it fired on.
pub type WatchCallback = Box<dyn FnMut(&VisibilityReport)>;

/// Optional enter/leave/visible callbacks.
///
/// Absent callbacks are simply skipped; there is no error for leaving any or
/// all of them unset.
#[derive(Default)]
pub struct WatchCallbacks {
    /// Fires once when the element becomes visible.
    pub on_enter: Option<WatchCallback>,
    /// Fires once when the element stops being visible.
    pub on_leave: Option<WatchCallback>,
    /// Fires on every tick while the element is visible, including the tick
    /// it entered on.
    pub on_visible: Option<WatchCallback>,
}

impl fmt::Debug for WatchCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchCallbacks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_visible", &self.on_visible.is_some())
            .finish()
    }
}

/// Callback payload: the visibility snapshot for one tick.
///
/// `percent` and `progress` are `None` exactly when the corresponding
/// reporting option ([`WatchOptions::percent_visible`] /
/// [`WatchOptions::percent_progress`]) is disabled; consumers that did not
/// ask for a metric never see a value for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityReport {
    /// Which element edges lie inside the container.
    pub position: Edges,
    /// Whether the element counts as visible.
    pub visible: bool,
    /// Visible fraction per axis, if requested.
    pub percent: Option<AxisPair>,
    /// Travel progress per axis, if requested.
    pub progress: Option<AxisPair>,
}

/// One watcher per tracked element: engine + transitions + callbacks + source.
///
/// Construction performs the initial recompute and dispatches the initial
/// events, so an element already visible at watch time fires `on_enter` and
/// `on_visible` immediately. After that the host drives the watcher through
/// [`Watcher::on_trigger`] (from its coalesced frame callback) and
/// [`Watcher::refresh`] (out of band, bypassing any throttling).
///
/// Each watcher owns its offset and state exclusively; nothing is shared
/// between watcher instances.
#[derive(Debug)]
pub struct Watcher<S: RectSource> {
    source: S,
    tracker: VisibilityTracker,
    transitions: TransitionState,
    callbacks: WatchCallbacks,
    report_percent: bool,
    report_progress: bool,
    last_trigger: Option<Trigger>,
}

impl<S: RectSource> Watcher<S> {
    /// Creates a watcher and runs the initial recompute and dispatch.
    pub fn new(source: S, options: WatchOptions, callbacks: WatchCallbacks) -> Self {
        let mut tracker = VisibilityTracker::new();
        tracker.set_partially_visible(options.partially_visible);
        tracker.set_ignore_overflow(options.ignore_overflow);
        tracker.set_offset(options.offset);

        let mut watcher = Self {
            source,
            tracker,
            transitions: TransitionState::new(),
            callbacks,
            report_percent: options.percent_visible,
            report_progress: options.percent_progress,
            last_trigger: None,
        };
        watcher.tick();
        watcher
    }

    /// Recomputes in response to a coalesced trigger and dispatches callbacks.
    ///
    /// Returns the resulting report; hosts call this from their frame
    /// callback after claiming the trigger from a
    /// [`FrameCoalescer`](sightline_frame::FrameCoalescer).
    pub fn on_trigger(&mut self, trigger: Trigger) -> VisibilityReport {
        self.last_trigger = Some(trigger);
        self.tick()
    }

    /// Forces an out-of-band recompute, bypassing any frame throttling.
    ///
    /// Dispatches callbacks like any other tick and returns the resulting
    /// report synchronously.
    pub fn refresh(&mut self) -> VisibilityReport {
        self.last_trigger = Some(Trigger::Refresh);
        self.tick()
    }

    fn tick(&mut self) -> VisibilityReport {
        let container = self.source.container_rect();
        let element = self.source.element_rect();
        let state = *self.tracker.recompute(container, element);
        let report = self.report_for(&state);

        for event in self.transitions.step(state.visible) {
            let callback = match event {
                VisibilityEvent::Enter => self.callbacks.on_enter.as_mut(),
                VisibilityEvent::Leave => self.callbacks.on_leave.as_mut(),
                VisibilityEvent::Visible => self.callbacks.on_visible.as_mut(),
            };
            if let Some(callback) = callback {
                callback(&report);
            }
        }
        report
    }

    fn report_for(&self, state: &VisibilityState) -> VisibilityReport {
        VisibilityReport {
            position: state.position,
            visible: state.visible,
            percent: self.report_percent.then_some(state.percent),
            progress: self.report_progress.then_some(state.progress),
        }
    }

    /// Returns the last computed visible boolean.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.tracker.visible()
    }

    /// Returns the last computed percent for one axis.
    #[must_use]
    pub fn percent(&self, axis: Axis) -> f64 {
        self.tracker.percent(axis)
    }

    /// Returns the last computed percent for both axes.
    #[must_use]
    pub fn percent_xy(&self) -> AxisPair {
        self.tracker.percent_xy()
    }

    /// Returns the last computed progress for one axis.
    #[must_use]
    pub fn progress(&self, axis: Axis) -> f64 {
        self.tracker.progress(axis)
    }

    /// Returns the last computed progress for both axes.
    #[must_use]
    pub fn progress_xy(&self) -> AxisPair {
        self.tracker.progress_xy()
    }

    /// Returns the last computed full state.
    #[must_use]
    pub fn state(&self) -> &VisibilityState {
        self.tracker.state()
    }

    /// Returns the stored offset (`left`/`top` in negated stored form).
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.tracker.offset()
    }

    /// Updates the element offset; applied on the next recompute.
    pub fn set_offset(&mut self, input: impl Into<OffsetInput>) {
        self.tracker.set_offset(input);
    }

    /// Returns a shared reference to the rectangle source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the rectangle source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Snapshot of the watcher's state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> WatcherDebugInfo {
        WatcherDebugInfo {
            partially_visible: self.tracker.partially_visible(),
            ignore_overflow: self.tracker.ignore_overflow(),
            report_percent: self.report_percent,
            report_progress: self.report_progress,
            offset: self.tracker.offset(),
            state: *self.tracker.state(),
            was_visible: self.transitions.was_visible(),
            last_trigger: self.last_trigger,
        }
    }
}

/// Debug snapshot of a [`Watcher`]'s state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatcherDebugInfo {
    /// Visibility policy in effect.
    pub partially_visible: bool,
    /// Overflow policy in effect.
    pub ignore_overflow: bool,
    /// Whether reports carry `percent`.
    pub report_percent: bool,
    /// Whether reports carry `progress`.
    pub report_progress: bool,
    /// Stored offset (`left`/`top` negated).
    pub offset: Offset,
    /// Last computed visibility state.
    pub state: VisibilityState,
    /// Visible boolean recorded by the previous transition step.
    pub was_visible: bool,
    /// Reason tag of the most recent host-driven recompute, if any.
    pub last_trigger: Option<Trigger>,
}
