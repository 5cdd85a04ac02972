//! Full-screen lightbox state

use crate::gesture::{GestureOutcome, GestureTracker};
use crate::navigation::SlideIndex;

/// Overlay with its own slide index and drag session.
///
/// The index survives `close()`, so a later open can resume from it.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    is_open: bool,
    opened_before: bool,
    position: SlideIndex,
    gesture: GestureTracker,
}

impl Lightbox {
    pub fn new(len: usize, gesture: GestureTracker) -> Self {
        Self {
            is_open: false,
            opened_before: false,
            position: SlideIndex::new(len),
            gesture,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether any session has been opened (and possibly closed) yet
    pub fn has_history(&self) -> bool {
        self.opened_before
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Overlay index while open
    pub fn index(&self) -> Option<usize> {
        if self.is_open {
            self.position.current()
        } else {
            None
        }
    }

    /// Slide the overlay strip is centred on, open or not
    pub fn active(&self) -> usize {
        self.position.get()
    }

    /// Index kept from the last session, if any
    pub fn retained_index(&self) -> Option<usize> {
        if self.opened_before {
            self.position.current()
        } else {
            None
        }
    }

    /// 1-based "current / total" readout
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.index().map(|i| (i + 1, self.position.len()))
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_open && self.position.can_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.is_open && self.position.can_next()
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        self.gesture.cancel();
        self.position.set_len(len);
        if len == 0 && self.is_open {
            tracing::debug!("Lightbox closed: display list became empty");
            self.is_open = false;
        }
    }

    /// Open at `at` (clamped). Nothing opens over an empty list.
    pub fn open(&mut self, at: usize) -> bool {
        if self.position.is_empty() {
            return false;
        }

        self.gesture.cancel();
        self.position.set_index(at);
        self.is_open = true;
        self.opened_before = true;
        tracing::info!("Lightbox opened at {}", self.position.get());
        true
    }

    /// Close the overlay, keeping the index
    pub fn close(&mut self) -> bool {
        self.gesture.cancel();
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        tracing::info!("Lightbox closed at {}", self.position.get());
        true
    }

    pub fn next(&mut self) -> bool {
        self.gesture.cancel();
        self.is_open && self.position.next()
    }

    pub fn previous(&mut self) -> bool {
        self.gesture.cancel();
        self.is_open && self.position.prev()
    }

    pub fn first(&mut self) -> bool {
        self.gesture.cancel();
        self.is_open && self.position.first()
    }

    pub fn last(&mut self) -> bool {
        self.gesture.cancel();
        self.is_open && self.position.last()
    }

    pub fn drag_start(&mut self, x: f32) {
        if self.is_open {
            self.gesture.start(x);
        }
    }

    pub fn drag_move(&mut self, x: f32) {
        self.gesture.move_to(x);
    }

    pub fn drag_end(&mut self) -> GestureOutcome {
        let outcome = self.gesture.end(self.position.get(), self.position.len());
        if self.is_open && self.position.offset_by(outcome.delta()) {
            tracing::debug!("Lightbox swiped -> {}", self.position.get());
        }
        outcome
    }

    pub fn drag_cancel(&mut self) -> GestureOutcome {
        self.gesture.cancel()
    }
}
