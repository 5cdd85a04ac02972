//! Inline carousel: main slide, hover arrows, thumbnail strip and dots

use super::controls::{self, BUTTON_SIZE};
use super::slides::{SlideFit, SlidePainter, SlideTextures};
use crate::theme::Theme;
use egui::{CursorIcon, Id, Rect, Response, Sense, Ui, Vec2};
use gallery_core::{Control, Gallery, GalleryEvent, GalleryResponse, View, ViewConfig};

/// Below this width the thumbnail strip gives way to dots
pub const COMPACT_WIDTH: f32 = 768.0;

const DOT_ROW_HEIGHT: f32 = 24.0;

/// Which position indicators to draw under the main slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    pub thumbnails: bool,
    pub dots: bool,
}

impl Indicators {
    pub fn for_width(width: f32, config: &ViewConfig) -> Self {
        let compact = width < COMPACT_WIDTH;
        let thumbnails = config.show_thumbnails && !compact;
        Self {
            thumbnails,
            dots: config.show_dots && !thumbnails,
        }
    }

    /// Vertical space the indicators take
    pub fn height(&self, thumbnail_size: f32) -> f32 {
        let mut height = 0.0;
        if self.thumbnails {
            height += thumbnail_size + 16.0;
        }
        if self.dots {
            height += DOT_ROW_HEIGHT;
        }
        height
    }
}

/// Inline carousel view
pub struct CarouselView;

impl CarouselView {
    /// Draw the inline view and collect the events the user produced
    pub fn ui(ui: &mut Ui, gallery: &Gallery, slides: &SlideTextures, theme: &Theme) -> Vec<GalleryEvent> {
        let mut events = Vec::new();
        let snapshot = gallery.snapshot();
        let config = &gallery.config().view;

        let width = ui.available_width();
        let indicators = Indicators::for_width(width, config);
        let side = width
            .min(ui.available_height() - indicators.height(config.thumbnail_size))
            .max(BUTTON_SIZE * 2.0);

        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, side), Sense::click_and_drag());

        if snapshot.is_placeholder() {
            Self::placeholder(ui, rect, theme);
            return events;
        }

        SlidePainter {
            id: Id::new("inline_slides"),
            fit: SlideFit::Cover,
            transition_secs: config.transition_ms as f32 / 1000.0,
            placeholder: theme.surface,
            placeholder_text: theme.text_secondary,
        }
        .paint(ui, rect, &gallery.slide_offsets(View::Inline), slides);

        track_pointer(ui, &response, View::Inline, &mut events);
        if response.clicked() {
            events.push(GalleryEvent::Click(Control::MainImage));
        }
        let cursor = if snapshot.dragging { CursorIcon::Grabbing } else { CursorIcon::ZoomIn };
        response.on_hover_cursor(cursor);

        // Arrows only appear while hovering the main slide
        if snapshot.len > 1 && ui.rect_contains_pointer(rect) {
            let (left, right) = arrow_rects(rect, 16.0);
            if controls::round_button(ui, left, Id::new("inline_prev"), "‹", snapshot.can_previous, theme.primary, theme.text) {
                events.push(GalleryEvent::Click(Control::Previous));
            }
            if controls::round_button(ui, right, Id::new("inline_next"), "›", snapshot.can_next, theme.primary, theme.text) {
                events.push(GalleryEvent::Click(Control::Next));
            }
        }

        if snapshot.len > 1 {
            if indicators.thumbnails {
                Self::thumbnail_strip(ui, gallery, slides, theme, &mut events);
            }
            if indicators.dots {
                Self::dot_row(ui, snapshot.len, snapshot.index, theme, &mut events);
            }
        }

        events
    }

    /// Pulsing cream box shown while there is nothing to display
    fn placeholder(ui: &Ui, rect: Rect, theme: &Theme) {
        let t = ui.input(|i| i.time) as f32;
        let pulse = 0.75 + 0.25 * (t * std::f32::consts::PI).sin();
        ui.painter().rect_filled(rect, 8.0, theme.surface.gamma_multiply(pulse));
        ui.ctx().request_repaint();
    }

    fn thumbnail_strip(
        ui: &mut Ui,
        gallery: &Gallery,
        slides: &SlideTextures,
        theme: &Theme,
        events: &mut Vec<GalleryEvent>,
    ) {
        let size = Vec2::splat(gallery.config().view.thumbnail_size);
        let active = gallery.carousel().index();

        ui.add_space(8.0);
        egui::ScrollArea::horizontal()
            .id_salt("gallery_thumbnails")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    for (i, descriptor) in gallery.images().iter().enumerate() {
                        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
                        let is_active = active == Some(i);

                        if ui.is_rect_visible(rect) {
                            match slides.texture(i) {
                                Some(texture) => {
                                    let (dest, uv) = super::slides::fit_rect(rect, texture.size_vec2(), SlideFit::Cover);
                                    let tint = if is_active || response.hovered() {
                                        egui::Color32::WHITE
                                    } else {
                                        egui::Color32::WHITE.gamma_multiply(0.7)
                                    };
                                    ui.painter().image(texture.id(), dest, uv, tint);
                                }
                                None => {
                                    ui.painter().rect_filled(rect, 6.0, theme.surface);
                                }
                            }
                            if is_active {
                                controls::selection_ring(ui, rect, theme);
                            }
                        }

                        if response.on_hover_text(descriptor.alt_or("Product Thumbnail")).clicked() {
                            events.push(GalleryEvent::Click(Control::Thumbnail(i)));
                        }
                    }
                });
            });
    }

    fn dot_row(ui: &mut Ui, len: usize, active: Option<usize>, theme: &Theme, events: &mut Vec<GalleryEvent>) {
        let (row, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), DOT_ROW_HEIGHT), Sense::hover());
        for i in 0..len {
            let rect = controls::dot_rect(row, len, active, i);
            if controls::dot(ui, rect, Id::new("inline_dot").with(i), active == Some(i), theme) {
                events.push(GalleryEvent::Click(Control::Dot(i)));
            }
        }
    }
}

/// Event implied by a finished inline gesture.
///
/// egui stops reporting a click once the pointer travels past its drag
/// distance, so a drag that stays under the commit threshold is turned into
/// the click on the main slide here. Releases without a tracked session
/// report `changed == false` and yield nothing.
pub fn tap_follow_up(event: &GalleryEvent, response: &GalleryResponse) -> Option<GalleryEvent> {
    let inline_release = matches!(event, GalleryEvent::PointerUp { view: View::Inline });
    let tapped = response.outcome.is_some_and(|o| o.is_tap());

    (inline_release && tapped && response.changed).then_some(GalleryEvent::Click(Control::MainImage))
}

/// Translate egui drag state on a slide surface into pointer events
pub(crate) fn track_pointer(ui: &Ui, response: &Response, view: View, events: &mut Vec<GalleryEvent>) {
    if response.drag_started() {
        // egui reports the drag once past its click threshold; start from the press point
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            events.push(GalleryEvent::PointerDown { view, x: origin.x });
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(GalleryEvent::PointerMove { view, x: pos.x });
        }
    }
    if response.drag_stopped() {
        events.push(GalleryEvent::PointerUp { view });
    }
}

/// Left and right arrow button rects inset from the edges of `rect`
pub(crate) fn arrow_rects(rect: Rect, inset: f32) -> (Rect, Rect) {
    let size = Vec2::splat(BUTTON_SIZE);
    let y = rect.center().y;
    let left = Rect::from_center_size(egui::pos2(rect.left() + inset + BUTTON_SIZE / 2.0, y), size);
    let right = Rect::from_center_size(egui::pos2(rect.right() - inset - BUTTON_SIZE / 2.0, y), size);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_uses_thumbnails() {
        let config = ViewConfig::default();
        let wide = Indicators::for_width(1024.0, &config);
        assert!(wide.thumbnails);
        assert!(!wide.dots);
        assert_eq!(wide.height(80.0), 96.0);
    }

    #[test]
    fn test_compact_layout_uses_dots() {
        let config = ViewConfig::default();
        let narrow = Indicators::for_width(375.0, &config);
        assert!(!narrow.thumbnails);
        assert!(narrow.dots);
        assert_eq!(narrow.height(80.0), DOT_ROW_HEIGHT);
    }

    #[test]
    fn test_dots_fill_in_when_thumbnails_disabled() {
        let config = ViewConfig {
            show_thumbnails: false,
            ..ViewConfig::default()
        };
        assert!(Indicators::for_width(1024.0, &config).dots);

        let config = ViewConfig {
            show_thumbnails: false,
            show_dots: false,
            ..ViewConfig::default()
        };
        assert_eq!(Indicators::for_width(1024.0, &config), Indicators::default());
    }

    fn gallery(n: usize) -> Gallery {
        let images: Vec<_> = (0..n)
            .map(|i| gallery_core::ImageDescriptor::new(&format!("{i}.jpg")))
            .collect();
        Gallery::with_images(gallery_core::GalleryConfig::default(), None, &images)
    }

    fn release(g: &mut Gallery, view: View, from: f32, to: f32) -> Option<GalleryEvent> {
        g.handle(GalleryEvent::PointerDown { view, x: from });
        g.handle(GalleryEvent::PointerMove { view, x: to });
        let up = GalleryEvent::PointerUp { view };
        let response = g.handle(up);
        tap_follow_up(&up, &response)
    }

    #[test]
    fn test_short_drag_opens_lightbox() {
        let mut g = gallery(3);
        g.handle(GalleryEvent::Click(Control::Next));

        let follow_up = release(&mut g, View::Inline, 100.0, 130.0);
        assert_eq!(follow_up, Some(GalleryEvent::Click(Control::MainImage)));

        g.handle(GalleryEvent::Click(Control::MainImage));
        assert!(g.snapshot().lightbox_open);
        assert_eq!(g.snapshot().lightbox_index, Some(1));
    }

    #[test]
    fn test_no_follow_up_for_swipes_or_stray_releases() {
        let mut g = gallery(3);
        assert_eq!(release(&mut g, View::Inline, 300.0, 200.0), None);
        assert_eq!(g.snapshot().index, Some(1));

        let up = GalleryEvent::PointerUp { view: View::Inline };
        let response = g.handle(up);
        assert_eq!(tap_follow_up(&up, &response), None);

        g.handle(GalleryEvent::Click(Control::MainImage));
        assert_eq!(release(&mut g, View::Lightbox, 100.0, 110.0), None);
    }

    #[test]
    fn test_arrow_rects_are_inset() {
        let rect = Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(400.0, 300.0));
        let (left, right) = arrow_rects(rect, 16.0);
        assert_eq!(left.left(), 16.0);
        assert_eq!(right.right(), 384.0);
        assert_eq!(left.center().y, 150.0);
        assert_eq!(left.size(), Vec2::splat(BUTTON_SIZE));
    }
}
