//! Clamped slide position shared by the inline carousel and the lightbox

/// Index into a list of known length, clamped to `0..len`.
///
/// While `len == 0` there is no current slide and every mutation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideIndex {
    index: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide, `None` for an empty list
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Raw index, 0 for an empty list
    pub fn get(&self) -> usize {
        self.index
    }

    /// Resize the list, pulling the index back inside the new bounds
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Set current index, clamped. Returns whether it changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }

        let max = self.len - 1;
        let index = index.min(max);
        let changed = index != self.index;
        self.index = index;
        changed
    }

    /// Move by a signed delta, clamped at both ends
    pub fn offset_by(&mut self, delta: isize) -> bool {
        let target = self.index.saturating_add_signed(delta);
        self.set_index(target)
    }

    /// Move to next item
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.set_index(self.index + 1)
        } else {
            false
        }
    }

    /// Move to previous item
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.set_index(self.index - 1)
        } else {
            false
        }
    }

    /// Go to first item
    pub fn first(&mut self) -> bool {
        self.set_index(0)
    }

    /// Go to last item
    pub fn last(&mut self) -> bool {
        self.set_index(self.len.saturating_sub(1))
    }

    pub fn can_prev(&self) -> bool {
        self.len > 0 && self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_out_of_range() {
        let mut idx = SlideIndex::new(4);
        assert!(idx.set_index(99));
        assert_eq!(idx.current(), Some(3));
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut idx = SlideIndex::new(4);
        idx.set_index(2);
        assert!(!idx.set_index(2));
        assert_eq!(idx.get(), 2);
    }

    #[test]
    fn test_bounds_do_not_wrap() {
        let mut idx = SlideIndex::new(3);
        assert!(!idx.prev());
        assert_eq!(idx.get(), 0);

        idx.last();
        assert!(!idx.next());
        assert_eq!(idx.get(), 2);
    }

    #[test]
    fn test_signed_offsets() {
        let mut idx = SlideIndex::new(3);
        assert!(!idx.offset_by(-1));
        assert!(idx.offset_by(1));
        assert!(!idx.offset_by(0));
        assert!(idx.offset_by(5));
        assert_eq!(idx.get(), 2);
    }

    #[test]
    fn test_empty_list() {
        let mut idx = SlideIndex::new(0);
        assert_eq!(idx.current(), None);
        assert!(!idx.set_index(1));
        assert!(!idx.next());
        assert!(!idx.prev());
        assert!(!idx.can_prev());
        assert!(!idx.can_next());
    }

    #[test]
    fn test_shrinking_list_pulls_index_back() {
        let mut idx = SlideIndex::new(5);
        idx.set_index(4);
        idx.set_len(2);
        assert_eq!(idx.current(), Some(1));
        idx.set_len(0);
        assert_eq!(idx.current(), None);
        assert_eq!(idx.get(), 0);
    }
}
