//! Full-screen lightbox overlay

use super::carousel_view::{arrow_rects, track_pointer, COMPACT_WIDTH};
use super::controls::{self, BUTTON_SIZE};
use super::slides::{SlideFit, SlidePainter, SlideTextures};
use crate::theme::Theme;
use egui::{Align2, Color32, Context, FontId, Id, Order, Pos2, Rect, Sense, Vec2};
use gallery_core::{Control, Gallery, GalleryEvent, View};

/// Lightbox overlay view
pub struct LightboxView;

impl LightboxView {
    /// Draw the overlay above everything else while the lightbox is open
    pub fn show(ctx: &Context, gallery: &Gallery, slides: &SlideTextures, theme: &Theme) -> Vec<GalleryEvent> {
        let mut events = Vec::new();
        let snapshot = gallery.snapshot();
        if !snapshot.lightbox_open {
            return events;
        }

        let screen = ctx.screen_rect();

        egui::Area::new(Id::new("gallery_lightbox"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), Sense::click_and_drag());
                ui.painter().rect_filled(rect, 0.0, theme.overlay);

                let stage = rect.shrink(stage_padding(rect.width()));
                SlidePainter {
                    id: Id::new("lightbox_slides"),
                    fit: SlideFit::Contain,
                    transition_secs: gallery.config().view.transition_ms as f32 / 1000.0,
                    placeholder: Color32::from_white_alpha(20),
                    placeholder_text: Color32::from_white_alpha(160),
                }
                .paint(ui, stage, &gallery.slide_offsets(View::Lightbox), slides);

                track_pointer(ui, &response, View::Lightbox, &mut events);

                if let Some((current, total)) = snapshot.counter {
                    ui.painter().text(
                        rect.left_top() + Vec2::new(16.0, 16.0),
                        Align2::LEFT_TOP,
                        counter_label(current, total),
                        FontId::proportional(16.0),
                        Color32::WHITE,
                    );
                }

                let close = Rect::from_min_size(
                    Pos2::new(rect.right() - 16.0 - BUTTON_SIZE, rect.top() + 16.0),
                    Vec2::splat(BUTTON_SIZE),
                );
                let chrome = Color32::from_white_alpha(25);
                if controls::round_button(ui, close, Id::new("lightbox_close"), "✕", true, chrome, Color32::WHITE) {
                    events.push(GalleryEvent::Click(Control::Close));
                }

                if snapshot.len > 1 {
                    let (left, right) = arrow_rects(rect, 16.0);
                    if controls::round_button(ui, left, Id::new("lightbox_prev"), "‹", snapshot.lightbox_can_previous, chrome, Color32::WHITE) {
                        events.push(GalleryEvent::Click(Control::LightboxPrevious));
                    }
                    if controls::round_button(ui, right, Id::new("lightbox_next"), "›", snapshot.lightbox_can_next, chrome, Color32::WHITE) {
                        events.push(GalleryEvent::Click(Control::LightboxNext));
                    }
                }
            });

        events
    }
}

/// "current / total", 1-based
pub fn counter_label(current: usize, total: usize) -> String {
    format!("{} / {}", current, total)
}

fn stage_padding(width: f32) -> f32 {
    if width >= COMPACT_WIDTH {
        32.0
    } else {
        16.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(3, 5), "3 / 5");
    }

    #[test]
    fn test_stage_padding_shrinks_on_small_screens() {
        assert_eq!(stage_padding(1280.0), 32.0);
        assert_eq!(stage_padding(375.0), 16.0);
    }
}
