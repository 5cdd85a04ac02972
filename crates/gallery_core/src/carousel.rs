//! Inline carousel state

use crate::gesture::{GestureOutcome, GestureTracker};
use crate::navigation::SlideIndex;

/// Inline strip: its own slide index plus the drag session on the main image
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    position: SlideIndex,
    gesture: GestureTracker,
}

impl Carousel {
    pub fn new(len: usize, gesture: GestureTracker) -> Self {
        Self {
            position: SlideIndex::new(len),
            gesture,
        }
    }

    pub fn position(&self) -> &SlideIndex {
        &self.position
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Current slide, `None` when there is nothing to show
    pub fn index(&self) -> Option<usize> {
        self.position.current()
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn can_go_previous(&self) -> bool {
        self.position.can_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.position.can_next()
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        self.gesture.cancel();
        self.position.set_len(len);
    }

    /// Jump to a slide (thumbnail and dot clicks)
    pub fn go_to(&mut self, index: usize) -> bool {
        self.gesture.cancel();
        let changed = self.position.set_index(index);
        if changed {
            tracing::debug!("Carousel -> {}", self.position.get());
        }
        changed
    }

    pub fn next(&mut self) -> bool {
        self.gesture.cancel();
        self.position.next()
    }

    pub fn previous(&mut self) -> bool {
        self.gesture.cancel();
        self.position.prev()
    }

    pub fn first(&mut self) -> bool {
        self.gesture.cancel();
        self.position.first()
    }

    pub fn last(&mut self) -> bool {
        self.gesture.cancel();
        self.position.last()
    }

    /// Apply a resolved gesture delta (-1, 0, +1)
    pub fn apply_commit(&mut self, delta: isize) -> bool {
        self.position.offset_by(delta.clamp(-1, 1))
    }

    pub fn drag_start(&mut self, x: f32) {
        if !self.is_empty() {
            self.gesture.start(x);
        }
    }

    pub fn drag_move(&mut self, x: f32) {
        self.gesture.move_to(x);
    }

    /// End the drag and apply whatever it committed
    pub fn drag_end(&mut self) -> GestureOutcome {
        let outcome = self.gesture.end(self.position.get(), self.position.len());
        if self.apply_commit(outcome.delta()) {
            tracing::debug!("Carousel swiped -> {}", self.position.get());
        }
        outcome
    }

    pub fn drag_cancel(&mut self) -> GestureOutcome {
        self.gesture.cancel()
    }
}
