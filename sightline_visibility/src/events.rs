// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility transition state machine.
//!
//! [`TransitionState`] holds only the previous visible boolean and turns a
//! stream of per-tick visible booleans into discrete events: `Enter` and
//! `Leave` fire exactly once per crossing, `Visible` fires on every visible
//! tick (including the tick that entered). Hosts map the returned events onto
//! their own callbacks or notification mechanism.

use smallvec::SmallVec;

/// A transition produced by [`TransitionState::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// The element became visible on this tick.
    Enter,
    /// The element stopped being visible on this tick.
    Leave,
    /// The element is visible on this tick (fires every visible tick).
    Visible,
}

/// Events produced by a single transition step, in dispatch order.
///
/// At most two events occur per step (`Enter` followed by `Visible`), so the
/// list never spills to the heap.
pub type VisibilityEvents = SmallVec<[VisibilityEvent; 2]>;

/// Two-state machine over the visible boolean.
///
/// The initial state is not-visible, so a first visible tick yields `Enter`.
/// There is no terminal state; the machine lives as long as its tracker.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionState {
    was_visible: bool,
}

impl TransitionState {
    /// Creates the machine in the not-visible state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visible boolean recorded by the previous step.
    #[must_use]
    pub fn was_visible(&self) -> bool {
        self.was_visible
    }

    /// Advances the machine with this tick's visible boolean.
    ///
    /// Returns the events to dispatch, in order: exactly one of
    /// [`Enter`](VisibilityEvent::Enter) / [`Leave`](VisibilityEvent::Leave)
    /// when the boolean changed (neither when unchanged), then
    /// [`Visible`](VisibilityEvent::Visible) whenever this tick is visible.
    pub fn step(&mut self, visible: bool) -> VisibilityEvents {
        let mut events = VisibilityEvents::new();
        if visible != self.was_visible {
            events.push(if visible {
                VisibilityEvent::Enter
            } else {
                VisibilityEvent::Leave
            });
        }
        if visible {
            events.push(VisibilityEvent::Visible);
        }
        self.was_visible = visible;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::{TransitionState, VisibilityEvent};

    #[test]
    fn first_visible_tick_enters_then_ticks() {
        let mut transitions = TransitionState::new();
        let events = transitions.step(true);
        assert_eq!(
            &events[..],
            &[VisibilityEvent::Enter, VisibilityEvent::Visible]
        );
    }

    #[test]
    fn staying_visible_only_ticks() {
        let mut transitions = TransitionState::new();
        transitions.step(true);
        let events = transitions.step(true);
        assert_eq!(&events[..], &[VisibilityEvent::Visible]);
    }

    #[test]
    fn leaving_fires_leave_exactly_once() {
        let mut transitions = TransitionState::new();
        transitions.step(true);
        let events = transitions.step(false);
        assert_eq!(&events[..], &[VisibilityEvent::Leave]);

        // Staying not-visible is silent.
        let events = transitions.step(false);
        assert!(events.is_empty());
    }

    #[test]
    fn initial_not_visible_tick_is_silent() {
        let mut transitions = TransitionState::new();
        let events = transitions.step(false);
        assert!(events.is_empty());
        assert!(!transitions.was_visible());
    }

    #[test]
    fn one_enter_or_leave_per_crossing() {
        let mut transitions = TransitionState::new();
        let mut enters = 0;
        let mut leaves = 0;
        for visible in [true, true, false, true, false, false, true] {
            for event in transitions.step(visible) {
                match event {
                    VisibilityEvent::Enter => enters += 1,
                    VisibilityEvent::Leave => leaves += 1,
                    VisibilityEvent::Visible => {}
                }
            }
        }
        // Crossings in the sequence: 3 rising edges, 2 falling edges.
        assert_eq!(enters, 3);
        assert_eq!(leaves, 2);
    }
}
