//! Drag/swipe tracking with tap disambiguation
//!
//! One tracker per interactive surface. A session runs start → move* → end
//! (or cancel). The live offset only exists while a session is tracking, so
//! "not dragging with a leftover offset" cannot be represented.

/// Minimum horizontal travel (px) before a drag navigates instead of tapping
pub const DEFAULT_COMMIT_THRESHOLD_PX: f32 = 50.0;

/// Single-slide step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    /// Signed index delta
    pub fn delta(self) -> isize {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

/// How a gesture session ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Travel stayed within the threshold; the caller decides what a tap means
    Tap,
    /// Crossed the threshold toward an existing neighbour
    Commit(Step),
    /// Crossed the threshold at the edge of the list; the view snaps back
    Snapback,
    /// Session abandoned before it ended
    Cancelled,
}

impl GestureOutcome {
    /// Signed index delta to apply (-1, 0, +1)
    pub fn delta(&self) -> isize {
        match self {
            GestureOutcome::Commit(step) => step.delta(),
            _ => 0,
        }
    }

    pub fn is_tap(&self) -> bool {
        matches!(self, GestureOutcome::Tap)
    }
}

/// Tracker phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Tracking {
        /// Horizontal coordinate where the session started
        origin: f32,
        /// `current - origin`
        offset: f32,
    },
}

/// Gesture state machine for one surface
#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    threshold: f32,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_THRESHOLD_PX)
    }
}

impl GestureTracker {
    /// Tracker committing drags longer than `threshold` px.
    ///
    /// A threshold that is not a positive finite number falls back to
    /// [`DEFAULT_COMMIT_THRESHOLD_PX`].
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold
        } else {
            tracing::warn!(
                "Invalid commit threshold {}, using {}px",
                threshold,
                DEFAULT_COMMIT_THRESHOLD_PX
            );
            DEFAULT_COMMIT_THRESHOLD_PX
        };

        Self {
            phase: GesturePhase::Idle,
            threshold,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Tracking { .. })
    }

    /// Live offset for visual feedback, 0 when idle
    pub fn live_offset(&self) -> f32 {
        match self.phase {
            GesturePhase::Tracking { offset, .. } => offset,
            GesturePhase::Idle => 0.0,
        }
    }

    /// Begin a session at `x`. A stale session is discarded.
    pub fn start(&mut self, x: f32) {
        if self.is_dragging() {
            tracing::debug!("Gesture restarted before previous session ended");
        }
        self.phase = GesturePhase::Tracking {
            origin: x,
            offset: 0.0,
        };
    }

    /// Update the live offset. Ignored when no session is active.
    pub fn move_to(&mut self, x: f32) {
        if let GesturePhase::Tracking { origin, offset } = &mut self.phase {
            *offset = x - *origin;
            tracing::trace!("Gesture offset {:.1}px", offset);
        }
    }

    /// Finish the session against the active slide of a `len`-long list
    pub fn end(&mut self, active: usize, len: usize) -> GestureOutcome {
        let offset = self.live_offset();
        self.phase = GesturePhase::Idle;

        if offset.is_nan() || offset.abs() <= self.threshold {
            return GestureOutcome::Tap;
        }

        let outcome = if offset > 0.0 {
            if active > 0 {
                GestureOutcome::Commit(Step::Previous)
            } else {
                GestureOutcome::Snapback
            }
        } else if active + 1 < len {
            GestureOutcome::Commit(Step::Next)
        } else {
            GestureOutcome::Snapback
        };

        tracing::debug!("Gesture ended at {:.1}px: {:?}", offset, outcome);
        outcome
    }

    /// Abandon the session. Always commits nothing.
    pub fn cancel(&mut self) -> GestureOutcome {
        if self.is_dragging() {
            tracing::debug!("Gesture cancelled");
        }
        self.phase = GesturePhase::Idle;
        GestureOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(tracker: &mut GestureTracker, from: f32, to: f32, active: usize, len: usize) -> GestureOutcome {
        tracker.start(from);
        tracker.move_to((from + to) / 2.0);
        tracker.move_to(to);
        tracker.end(active, len)
    }

    #[test]
    fn test_unusable_threshold_falls_back_to_default() {
        for bad in [f32::NAN, f32::INFINITY, 0.0, -20.0] {
            let mut tracker = GestureTracker::new(bad);
            assert_eq!(tracker.threshold(), DEFAULT_COMMIT_THRESHOLD_PX);

            tracker.start(100.0);
            assert_eq!(tracker.end(0, 4), GestureOutcome::Tap);
            assert_eq!(swipe(&mut tracker, 100.0, 60.0, 0, 4), GestureOutcome::Tap);
        }
    }

    #[test]
    fn test_short_drag_is_tap() {
        let mut t = GestureTracker::default();
        let outcome = swipe(&mut t, 100.0, 140.0, 1, 4);
        assert_eq!(outcome, GestureOutcome::Tap);
        assert_eq!(outcome.delta(), 0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut t = GestureTracker::default();
        assert_eq!(swipe(&mut t, 100.0, 50.0, 1, 4), GestureOutcome::Tap);
        assert_eq!(swipe(&mut t, 100.0, 150.0, 1, 4), GestureOutcome::Tap);
    }

    #[test]
    fn test_left_swipe_commits_next() {
        let mut t = GestureTracker::default();
        let outcome = swipe(&mut t, 200.0, 140.0, 0, 4);
        assert_eq!(outcome, GestureOutcome::Commit(Step::Next));
        assert_eq!(outcome.delta(), 1);
    }

    #[test]
    fn test_left_swipe_at_last_snaps_back() {
        let mut t = GestureTracker::default();
        let outcome = swipe(&mut t, 200.0, 140.0, 3, 4);
        assert_eq!(outcome, GestureOutcome::Snapback);
        assert_eq!(outcome.delta(), 0);
    }

    #[test]
    fn test_right_swipe_commits_previous() {
        let mut t = GestureTracker::default();
        assert_eq!(swipe(&mut t, 10.0, 90.0, 2, 4), GestureOutcome::Commit(Step::Previous));
        assert_eq!(swipe(&mut t, 10.0, 90.0, 0, 4), GestureOutcome::Snapback);
    }

    #[test]
    fn test_offset_visible_while_dragging_at_edge() {
        let mut t = GestureTracker::default();
        t.start(0.0);
        t.move_to(120.0);
        assert!(t.is_dragging());
        assert_eq!(t.live_offset(), 120.0);

        t.end(0, 3);
        assert!(!t.is_dragging());
        assert_eq!(t.live_offset(), 0.0);
        assert_eq!(t.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_end_without_start_is_tap() {
        let mut t = GestureTracker::default();
        assert_eq!(t.end(1, 3), GestureOutcome::Tap);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut t = GestureTracker::default();
        t.move_to(300.0);
        assert!(!t.is_dragging());
        assert_eq!(t.live_offset(), 0.0);
    }

    #[test]
    fn test_cancel_resets() {
        let mut t = GestureTracker::default();
        t.start(0.0);
        t.move_to(-200.0);
        assert_eq!(t.cancel(), GestureOutcome::Cancelled);
        assert!(!t.is_dragging());
        assert_eq!(t.end(0, 3), GestureOutcome::Tap);
    }

    #[test]
    fn test_restart_discards_stale_session() {
        let mut t = GestureTracker::default();
        t.start(0.0);
        t.move_to(-200.0);
        t.start(500.0);
        assert_eq!(t.live_offset(), 0.0);
        t.move_to(480.0);
        assert_eq!(t.end(0, 3), GestureOutcome::Tap);
    }

    #[test]
    fn test_custom_threshold() {
        let mut t = GestureTracker::new(20.0);
        assert_eq!(swipe(&mut t, 100.0, 75.0, 0, 2), GestureOutcome::Commit(Step::Next));
    }
}
