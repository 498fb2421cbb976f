// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-switch debouncing driven by caller-supplied timestamps.

use kurbo::{Point, Rect};

use crate::triangle::{point_in_triangle, safe_triangle};

/// Default debounce applied to a deferred hover switch, in milliseconds.
pub const HOVER_SWITCH_DELAY_MS: u64 = 300;

/// The last two observed pointer positions.
///
/// Ephemeral by design: every [`record`](Self::record) shifts the current
/// position into `prev` and overwrites `current`. Only the intent detector
/// reads it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerTrace {
    prev: Option<Point>,
    current: Option<Point>,
}

impl PointerTrace {
    /// Record a pointer position.
    pub fn record(&mut self, p: Point) {
        self.prev = self.current;
        self.current = Some(p);
    }

    /// The position before the current one, if two moves were observed.
    pub fn prev(&self) -> Option<Point> {
        self.prev
    }

    /// The most recent position, if any move was observed.
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Forget both positions.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of a hover-intent decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverDecision {
    /// The pointer is not travelling toward the open panel; apply the hover
    /// switch right away.
    Immediate,
    /// The pointer is aimed at the open panel; the switch is held until
    /// `deadline` and released by [`HoverIntent::poll`].
    Deferred {
        /// Timestamp (caller clock, milliseconds) at which the pending
        /// switch fires.
        deadline: u64,
    },
}

/// Timestamp-driven hover-switch state machine.
///
/// `T` is the payload describing the deferred switch (for a menu, typically
/// the hovered depth plus the submenu id to open). The machine holds at most
/// one pending switch; a newer decision supersedes it.
///
/// Cancellation contract: the owner calls [`cancel`](Self::cancel) when the
/// pointer leaves the menu entirely and drops the machine on unmount. A
/// pending switch whose target vanished is harmless — applying a stale
/// switch is a no-op at the next render.
#[derive(Clone, Debug)]
pub struct HoverIntent<T> {
    trace: PointerTrace,
    pending: Option<(T, u64)>,
    delay_ms: u64,
}

impl<T: Copy> HoverIntent<T> {
    /// Create a machine with the default [`HOVER_SWITCH_DELAY_MS`] debounce.
    pub fn new() -> Self {
        Self::with_delay(HOVER_SWITCH_DELAY_MS)
    }

    /// Create a machine with a custom debounce delay in milliseconds.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            trace: PointerTrace::default(),
            pending: None,
            delay_ms,
        }
    }

    /// Feed a pointer move into the trace.
    pub fn record_move(&mut self, p: Point) {
        self.trace.record(p);
    }

    /// The recorded pointer trace.
    pub fn trace(&self) -> &PointerTrace {
        &self.trace
    }

    /// Decide whether a hover switch to `target` applies now or is deferred.
    ///
    /// `open_panel` is the rectangle of the currently open submenu panel the
    /// switch would replace, or `None` when no panel is open. The switch is
    /// deferred only when two pointer positions are known and the current
    /// one lies inside the safe triangle spanned by the previous position
    /// and the panel's near edge. An immediate decision clears any pending
    /// switch.
    pub fn decide(&mut self, target: T, open_panel: Option<Rect>, now: u64) -> HoverDecision {
        if let Some(panel) = open_panel
            && let (Some(prev), Some(current)) = (self.trace.prev(), self.trace.current())
        {
            let [a, b, c] = safe_triangle(panel, prev);
            if point_in_triangle(current, a, b, c) {
                let deadline = now + self.delay_ms;
                self.pending = Some((target, deadline));
                return HoverDecision::Deferred { deadline };
            }
        }
        self.pending = None;
        HoverDecision::Immediate
    }

    /// Release the pending switch once its deadline has passed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match self.pending {
            Some((target, deadline)) if now >= deadline => {
                self.pending = None;
                Some(target)
            }
            _ => None,
        }
    }

    /// Deadline of the pending switch, for host wake-up scheduling.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Whether a switch is currently held.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending switch (pointer left the menu, or a superseding
    /// interaction happened).
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T: Copy> Default for HoverIntent<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Rect = Rect::new(200.0, 0.0, 360.0, 240.0);

    fn aimed_at_panel() -> HoverIntent<u32> {
        let mut intent = HoverIntent::new();
        intent.record_move(Point::new(120.0, 100.0));
        intent.record_move(Point::new(140.0, 104.0));
        intent
    }

    #[test]
    fn no_open_panel_switches_immediately() {
        let mut intent: HoverIntent<u32> = HoverIntent::new();
        intent.record_move(Point::new(10.0, 10.0));
        intent.record_move(Point::new(20.0, 10.0));
        assert_eq!(intent.decide(1, None, 0), HoverDecision::Immediate);
        assert!(!intent.has_pending());
    }

    #[test]
    fn single_observed_position_switches_immediately() {
        let mut intent: HoverIntent<u32> = HoverIntent::new();
        intent.record_move(Point::new(120.0, 100.0));
        assert_eq!(intent.decide(1, Some(PANEL), 0), HoverDecision::Immediate);
    }

    #[test]
    fn motion_toward_panel_defers_until_deadline() {
        let mut intent = aimed_at_panel();
        let decision = intent.decide(7, Some(PANEL), 1_000);
        assert_eq!(
            decision,
            HoverDecision::Deferred {
                deadline: 1_000 + HOVER_SWITCH_DELAY_MS
            }
        );
        assert_eq!(intent.deadline(), Some(1_300));
        assert_eq!(intent.poll(1_299), None);
        assert_eq!(intent.poll(1_300), Some(7));
        // Released exactly once.
        assert_eq!(intent.poll(2_000), None);
    }

    #[test]
    fn motion_away_from_panel_is_immediate_and_clears_pending() {
        let mut intent = aimed_at_panel();
        assert!(matches!(
            intent.decide(7, Some(PANEL), 1_000),
            HoverDecision::Deferred { .. }
        ));

        // Pointer drops straight down onto another sibling.
        intent.record_move(Point::new(141.0, 300.0));
        assert_eq!(intent.decide(8, Some(PANEL), 1_050), HoverDecision::Immediate);
        assert!(!intent.has_pending());
        assert_eq!(intent.poll(2_000), None);
    }

    #[test]
    fn newer_deferred_decision_supersedes_pending() {
        let mut intent = aimed_at_panel();
        intent.decide(7, Some(PANEL), 1_000);

        intent.record_move(Point::new(150.0, 110.0));
        intent.decide(8, Some(PANEL), 1_100);

        assert_eq!(intent.poll(1_300), None); // old deadline no longer applies
        assert_eq!(intent.poll(1_400), Some(8));
    }

    #[test]
    fn cancel_drops_pending_switch() {
        let mut intent = aimed_at_panel();
        intent.decide(7, Some(PANEL), 1_000);
        intent.cancel();
        assert_eq!(intent.deadline(), None);
        assert_eq!(intent.poll(10_000), None);
    }

    #[test]
    fn custom_delay_is_honored() {
        let mut intent: HoverIntent<u32> = HoverIntent::with_delay(50);
        intent.record_move(Point::new(120.0, 100.0));
        intent.record_move(Point::new(140.0, 104.0));
        assert_eq!(
            intent.decide(7, Some(PANEL), 0),
            HoverDecision::Deferred { deadline: 50 }
        );
        assert_eq!(intent.poll(50), Some(7));
    }
}
