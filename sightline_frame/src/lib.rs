// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_frame --heading-base-level=0

//! Sightline Frame: host-agnostic per-frame trigger coalescing.
//!
//! Scroll and resize events arrive in bursts, far faster than a display can
//! show their effects. This crate provides a small scheduler that collapses
//! such bursts into at most one visibility recompute per display frame:
//!
//! - [`Trigger`]: the reason tag for a recompute (`Scroll`, `Resize`,
//!   `Refresh`).
//! - [`FrameRequester`]: the injectable frame-scheduling primitive. Real hosts
//!   back it with their display loop's "request a frame callback" facility;
//!   tests back it with a counter.
//! - [`FrameCoalescer`]: a pending-trigger slot with a "run at most once per
//!   frame" contract. Each adapter owns its own coalescer; there is no global
//!   frame flag or shared scheduler state.
//!
//! The contract: [`FrameCoalescer::signal`] records the first trigger of a
//! burst and asks the host for one frame; further triggers arriving before
//! that frame runs are dropped (not queued). The host's frame callback calls
//! [`FrameCoalescer::take`] to claim the pending trigger and re-arm the
//! coalescer for the next burst. Manual refreshes bypass the coalescer
//! entirely and go straight to the consumer's `refresh` operation.
//!
//! ## Minimal example
//!
//! ```rust
//! use sightline_frame::{FrameCoalescer, Trigger};
//!
//! let mut frames_requested = 0_u32;
//! let mut coalescer = FrameCoalescer::new();
//!
//! // A burst of scroll events: only the first schedules a frame.
//! assert!(coalescer.signal(Trigger::Scroll, &mut || frames_requested += 1));
//! assert!(!coalescer.signal(Trigger::Scroll, &mut || frames_requested += 1));
//! assert!(!coalescer.signal(Trigger::Resize, &mut || frames_requested += 1));
//! assert_eq!(frames_requested, 1);
//!
//! // The host's frame callback claims the trigger and recomputes.
//! assert_eq!(coalescer.take(), Some(Trigger::Scroll));
//!
//! // The next burst schedules a fresh frame.
//! assert!(coalescer.signal(Trigger::Resize, &mut || frames_requested += 1));
//! assert_eq!(frames_requested, 2);
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// Why a recompute is being requested.
///
/// Hosts report orientation changes as [`Trigger::Resize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The container scrolled.
    Scroll,
    /// The container or viewport was resized.
    Resize,
    /// A caller forced an out-of-band recompute.
    Refresh,
}

/// Injectable frame-scheduling primitive.
///
/// [`FrameCoalescer`] calls [`request_frame`](Self::request_frame) when a
/// burst needs a frame callback. A real host forwards this to its display
/// loop; tests can use a plain closure, since any `FnMut()` implements this
/// trait.
pub trait FrameRequester {
    /// Asks the host to invoke its frame callback once, on the next frame.
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameRequester for F {
    fn request_frame(&mut self) {
        self();
    }
}

/// Per-adapter trigger slot enforcing at most one recompute per frame.
///
/// One coalescer belongs to one trigger adapter; cloning creates an
/// independent slot. The coalescer never runs anything itself: it only
/// decides *whether* a frame is needed and remembers *why*, leaving the
/// actual frame callback to the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCoalescer {
    pending: Option<Trigger>,
}

impl FrameCoalescer {
    /// Creates an idle coalescer with no pending trigger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a raw event.
    ///
    /// When idle, records `trigger`, requests one frame from `frames`, and
    /// returns `true`. When a trigger is already pending for the current
    /// frame, the new event is dropped and this returns `false`; the pending
    /// trigger keeps its original reason tag.
    pub fn signal(&mut self, trigger: Trigger, frames: &mut impl FrameRequester) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(trigger);
        frames.request_frame();
        true
    }

    /// Claims the pending trigger from inside the host's frame callback.
    ///
    /// Clears the slot, so the next [`signal`](Self::signal) schedules a new
    /// frame. Returns `None` when nothing was pending (a spurious frame).
    #[must_use]
    pub fn take(&mut self) -> Option<Trigger> {
        self.pending.take()
    }

    /// Returns `true` while a trigger is waiting for its frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameCoalescer, Trigger};

    #[test]
    fn first_signal_schedules_a_frame() {
        let mut frames = 0_u32;
        let mut coalescer = FrameCoalescer::new();

        assert!(coalescer.signal(Trigger::Scroll, &mut || frames += 1));
        assert!(coalescer.is_pending());
        assert_eq!(frames, 1);
    }

    #[test]
    fn burst_is_coalesced_into_one_frame() {
        let mut frames = 0_u32;
        let mut coalescer = FrameCoalescer::new();

        for _ in 0..100 {
            coalescer.signal(Trigger::Scroll, &mut || frames += 1);
        }
        assert_eq!(frames, 1);
        assert_eq!(coalescer.take(), Some(Trigger::Scroll));
    }

    #[test]
    fn later_triggers_in_a_burst_are_dropped_not_queued() {
        let mut frames = 0_u32;
        let mut coalescer = FrameCoalescer::new();

        coalescer.signal(Trigger::Scroll, &mut || frames += 1);
        assert!(!coalescer.signal(Trigger::Resize, &mut || frames += 1));

        // The first reason wins; nothing is queued behind it.
        assert_eq!(coalescer.take(), Some(Trigger::Scroll));
        assert_eq!(coalescer.take(), None);
    }

    #[test]
    fn take_rearms_for_the_next_burst() {
        let mut frames = 0_u32;
        let mut coalescer = FrameCoalescer::new();

        coalescer.signal(Trigger::Scroll, &mut || frames += 1);
        assert_eq!(coalescer.take(), Some(Trigger::Scroll));
        assert!(!coalescer.is_pending());

        assert!(coalescer.signal(Trigger::Resize, &mut || frames += 1));
        assert_eq!(frames, 2);
        assert_eq!(coalescer.take(), Some(Trigger::Resize));
    }

    #[test]
    fn spurious_frame_yields_nothing() {
        let mut coalescer = FrameCoalescer::new();
        assert_eq!(coalescer.take(), None);
    }

    #[test]
    fn coalescers_are_independent() {
        let mut frames_a = 0_u32;
        let mut frames_b = 0_u32;
        let mut a = FrameCoalescer::new();
        let mut b = FrameCoalescer::new();

        a.signal(Trigger::Scroll, &mut || frames_a += 1);
        b.signal(Trigger::Resize, &mut || frames_b += 1);

        assert_eq!((frames_a, frames_b), (1, 1));
        assert_eq!(a.take(), Some(Trigger::Scroll));
        assert_eq!(b.take(), Some(Trigger::Resize));
    }
}
