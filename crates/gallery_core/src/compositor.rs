//! Per-slide horizontal offsets shared by both views

/// Horizontal shift of one slide: a share of the slide width plus absolute pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideOffset {
    /// Percentage of one slide width (100.0 = one slide to the right)
    pub percent: f32,
    /// Absolute pixel shift from an in-progress drag
    pub pixels: f32,
}

impl SlideOffset {
    /// Whether this slide sits exactly in the viewport
    pub fn is_centered(&self) -> bool {
        self.percent == 0.0 && self.pixels == 0.0
    }

    /// Transitions run only when the slide is not following the pointer
    pub fn is_animated(&self) -> bool {
        self.pixels == 0.0
    }

    /// Absolute shift for a slide of the given width
    pub fn resolve(&self, slide_width: f32) -> f32 {
        self.percent / 100.0 * slide_width + self.pixels
    }

    /// CSS transform expression for web hosts
    pub fn to_css(&self) -> String {
        format!(
            "translate3d(calc({}% + {}px), 0, 0)",
            self.percent, self.pixels
        )
    }
}

/// Offset of `slot` relative to the `active` slide.
///
/// The live drag offset is only applied while a drag is in progress.
pub fn offset_for(slot: usize, active: usize, dragging: bool, live_px: f32) -> SlideOffset {
    let diff = slot as f32 - active as f32;
    SlideOffset {
        percent: diff * 100.0,
        pixels: if dragging { live_px } else { 0.0 },
    }
}

/// Offsets for every slide of a `len`-long strip
pub fn offsets(len: usize, active: usize, dragging: bool, live_px: f32) -> Vec<SlideOffset> {
    (0..len)
        .map(|slot| offset_for(slot, active, dragging, live_px))
        .collect()
}
