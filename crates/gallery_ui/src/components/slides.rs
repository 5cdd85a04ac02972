//! Slide strip painting shared by the inline carousel and the lightbox

use egui::{Align2, Color32, FontId, Id, Pos2, Rect, TextureHandle, Ui, Vec2};
use gallery_core::SlideOffset;

/// One displayable slide
#[derive(Clone)]
pub struct Slide {
    pub texture: Option<TextureHandle>,
    pub alt: String,
    /// Declared width / height, used to size the tile until pixels exist
    pub aspect: Option<f32>,
}

/// Slides in display order, index-aligned with the gallery's display list
#[derive(Clone, Default)]
pub struct SlideTextures {
    slides: Vec<Slide>,
}

impl SlideTextures {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn texture(&self, index: usize) -> Option<&TextureHandle> {
        self.get(index).and_then(|s| s.texture.as_ref())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// How an image fills its slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFit {
    /// Fill the slide, cropping the overflow
    Cover,
    /// Show the whole image, letterboxed
    Contain,
}

/// Destination rect and UV rect for an image of `image_size` inside `container`
pub fn fit_rect(container: Rect, image_size: Vec2, fit: SlideFit) -> (Rect, Rect) {
    let full_uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || container.width() <= 0.0 || container.height() <= 0.0 {
        return (container, full_uv);
    }

    let scale_x = container.width() / image_size.x;
    let scale_y = container.height() / image_size.y;

    match fit {
        SlideFit::Contain => {
            let scale = scale_x.min(scale_y);
            (Rect::from_center_size(container.center(), image_size * scale), full_uv)
        }
        SlideFit::Cover => {
            let scale = scale_x.max(scale_y);
            // Visible share of the image on each axis
            let visible = container.size() / (image_size * scale);
            (container, Rect::from_center_size(Pos2::new(0.5, 0.5), visible))
        }
    }
}

/// Tile drawn in place of an undecoded slide.
///
/// Letterboxed views keep the declared aspect ratio so the layout does not
/// jump once the image arrives.
pub fn placeholder_rect(slide: Rect, aspect: Option<f32>, fit: SlideFit) -> Rect {
    match (fit, aspect) {
        (SlideFit::Contain, Some(aspect)) => fit_rect(slide, Vec2::new(aspect, 1.0), fit).0,
        _ => slide,
    }
}

/// Paints a horizontal strip of slides positioned by [`SlideOffset`]s
pub struct SlidePainter {
    pub id: Id,
    pub fit: SlideFit,
    /// Duration of the settle animation when a slide is not following the pointer
    pub transition_secs: f32,
    pub placeholder: Color32,
    pub placeholder_text: Color32,
}

impl SlidePainter {
    pub fn paint(&self, ui: &Ui, rect: Rect, offsets: &[SlideOffset], slides: &SlideTextures) {
        let painter = ui.painter_at(rect);

        for (i, offset) in offsets.iter().enumerate() {
            let target = offset.resolve(rect.width());
            let duration = if offset.is_animated() { self.transition_secs } else { 0.0 };
            let dx = ui.ctx().animate_value_with_time(self.id.with(i), target, duration);

            let slide_rect = rect.translate(Vec2::new(dx, 0.0));
            if !slide_rect.intersects(rect) {
                continue;
            }

            match slides.get(i) {
                Some(Slide { texture: Some(texture), .. }) => {
                    let (dest, uv) = fit_rect(slide_rect, texture.size_vec2(), self.fit);
                    painter.image(texture.id(), dest, uv, Color32::WHITE);
                }
                other => {
                    // Not decoded (yet): cream tile with the alt text
                    let tile = placeholder_rect(slide_rect, other.and_then(|s| s.aspect), self.fit);
                    painter.rect_filled(tile, 0.0, self.placeholder);
                    if let Some(slide) = other {
                        painter.text(
                            tile.center(),
                            Align2::CENTER_CENTER,
                            &slide.alt,
                            FontId::proportional(14.0),
                            self.placeholder_text,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 400.0))
    }

    #[test]
    fn test_contain_letterboxes_wide_image() {
        let (dest, uv) = fit_rect(container(), Vec2::new(800.0, 400.0), SlideFit::Contain);
        assert_eq!(dest.size(), Vec2::new(400.0, 200.0));
        assert_eq!(dest.center(), container().center());
        assert_eq!(uv, Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)));
    }

    #[test]
    fn test_cover_crops_wide_image() {
        let (dest, uv) = fit_rect(container(), Vec2::new(800.0, 400.0), SlideFit::Cover);
        assert_eq!(dest, container());
        assert_eq!(uv.width(), 0.5);
        assert_eq!(uv.height(), 1.0);
        assert_eq!(uv.center(), Pos2::new(0.5, 0.5));
    }

    #[test]
    fn test_degenerate_sizes_fill_container() {
        let (dest, _) = fit_rect(container(), Vec2::ZERO, SlideFit::Contain);
        assert_eq!(dest, container());
    }

    #[test]
    fn test_placeholder_keeps_declared_aspect() {
        let tile = placeholder_rect(container(), Some(2.0), SlideFit::Contain);
        assert_eq!(tile.size(), Vec2::new(400.0, 200.0));

        assert_eq!(placeholder_rect(container(), None, SlideFit::Contain), container());
        assert_eq!(placeholder_rect(container(), Some(2.0), SlideFit::Cover), container());
    }

    #[test]
    fn test_empty_textures() {
        let slides = SlideTextures::default();
        assert!(slides.is_empty());
        assert!(slides.texture(0).is_none());
    }
}
