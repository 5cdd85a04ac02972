//! Gallery controller
//!
//! Owns the display list, the inline carousel and the lightbox, and routes
//! host input to whichever view is interactive. The inline strip is inert
//! while the lightbox is open, so the two indices only meet at the moment
//! the lightbox opens.

use crate::carousel::Carousel;
use crate::command::{Command, CommandId};
use crate::compositor::{offsets, SlideOffset};
use crate::config::{GalleryConfig, ReopenPolicy};
use crate::display_list::{normalize, DisplayList, ImageDescriptor, ImageId};
use crate::gesture::{GestureOutcome, GestureTracker};
use crate::lightbox::Lightbox;

/// Which rendering of the strip an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Inline,
    Lightbox,
}

/// Discrete controls a host can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Inline arrows
    Previous,
    Next,
    /// Thumbnail strip button
    Thumbnail(usize),
    /// Dot indicator
    Dot(usize),
    /// The inline main image; opens the lightbox
    MainImage,
    /// Lightbox close button
    Close,
    /// Lightbox arrows
    LightboxPrevious,
    LightboxNext,
}

impl Control {
    /// View the control is rendered in
    pub fn view(&self) -> View {
        match self {
            Control::Close | Control::LightboxPrevious | Control::LightboxNext => View::Lightbox,
            _ => View::Inline,
        }
    }
}

/// Host input, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEvent {
    PointerDown { view: View, x: f32 },
    PointerMove { view: View, x: f32 },
    PointerUp { view: View },
    /// Pointer left the surface or the window lost focus
    PointerCancel,
    Click(Control),
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GalleryResponse {
    /// Something visible changed; the host should repaint
    pub changed: bool,
    /// The event targeted a view that is not interactive
    pub ignored: bool,
    /// How a gesture session ended, when this event ended one
    pub outcome: Option<GestureOutcome>,
}

impl GalleryResponse {
    fn ignored() -> Self {
        Self {
            ignored: true,
            ..Self::default()
        }
    }

    fn changed(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }
}

/// Read-only view of the gallery for hosts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GallerySnapshot {
    pub len: usize,
    /// Inline slide, `None` when the list is empty
    pub index: Option<usize>,
    pub can_previous: bool,
    pub can_next: bool,
    pub lightbox_open: bool,
    pub lightbox_index: Option<usize>,
    pub lightbox_can_previous: bool,
    pub lightbox_can_next: bool,
    /// 1-based "current / total" for the lightbox readout
    pub counter: Option<(usize, usize)>,
    /// A drag is in progress on the interactive view
    pub dragging: bool,
}

impl GallerySnapshot {
    /// Nothing to show; render the placeholder instead of a carousel
    pub fn is_placeholder(&self) -> bool {
        self.len == 0
    }
}

/// Synchronized carousel + lightbox controller
#[derive(Debug, Clone)]
pub struct Gallery {
    config: GalleryConfig,
    images: DisplayList,
    carousel: Carousel,
    lightbox: Lightbox,
    /// Inline slide when the lightbox last closed
    inline_at_close: Option<usize>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Self {
        let threshold = config.gesture.commit_threshold_px;
        Self {
            config,
            images: DisplayList::empty(),
            carousel: Carousel::new(0, GestureTracker::new(threshold)),
            lightbox: Lightbox::new(0, GestureTracker::new(threshold)),
            inline_at_close: None,
        }
    }

    pub fn with_images(
        config: GalleryConfig,
        preferred: Option<&ImageDescriptor>,
        base: &[ImageDescriptor],
    ) -> Self {
        let mut gallery = Self::new(config);
        gallery.set_images(preferred, base);
        gallery
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn images(&self) -> &DisplayList {
        &self.images
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Recompute the display list. Returns whether it changed.
    ///
    /// Both indices are clamped into the new bounds and any drag is dropped.
    pub fn set_images(&mut self, preferred: Option<&ImageDescriptor>, base: &[ImageDescriptor]) -> bool {
        let images = normalize(preferred, base);
        if images == self.images {
            return false;
        }

        let len = images.len();
        self.images = images;
        self.carousel.set_len(len);
        self.lightbox.set_len(len);
        self.inline_at_close = None;
        tracing::info!("Gallery showing {} images", len);
        true
    }

    /// Move the inline carousel to the image with `id`.
    ///
    /// Returns false when no image carries that id or it is already shown.
    pub fn show_image(&mut self, id: &ImageId) -> bool {
        match self.images.position_of(id) {
            Some(position) => self.carousel.go_to(position),
            None => {
                tracing::debug!("No image with id {} to show", id);
                false
            }
        }
    }

    /// The view that currently receives input
    pub fn interactive_view(&self) -> View {
        if self.lightbox.is_open() {
            View::Lightbox
        } else {
            View::Inline
        }
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            len: self.images.len(),
            index: self.carousel.index(),
            can_previous: self.carousel.can_go_previous(),
            can_next: self.carousel.can_go_next(),
            lightbox_open: self.lightbox.is_open(),
            lightbox_index: self.lightbox.index(),
            lightbox_can_previous: self.lightbox.can_go_previous(),
            lightbox_can_next: self.lightbox.can_go_next(),
            counter: self.lightbox.counter(),
            dragging: self.carousel.gesture().is_dragging() || self.lightbox.gesture().is_dragging(),
        }
    }

    /// Offsets for every slide of `view`, in display order
    pub fn slide_offsets(&self, view: View) -> Vec<SlideOffset> {
        let (active, gesture) = match view {
            View::Inline => (self.carousel.position().get(), self.carousel.gesture()),
            View::Lightbox => (self.lightbox.active(), self.lightbox.gesture()),
        };
        offsets(
            self.images.len(),
            active,
            gesture.is_dragging(),
            gesture.live_offset(),
        )
    }

    /// Open the lightbox according to the reopen policy
    pub fn open_lightbox(&mut self) -> bool {
        let Some(inline) = self.carousel.index() else {
            return false;
        };

        // Resume only while the inline strip still shows what it showed at close
        let resume = self.config.lightbox.reopen == ReopenPolicy::Resume
            && self.lightbox.has_history()
            && self.inline_at_close == Some(inline);
        let start = match self.lightbox.retained_index() {
            Some(retained) if resume => retained,
            _ => inline,
        };

        self.carousel.drag_cancel();
        self.lightbox.open(start)
    }

    pub fn close_lightbox(&mut self) -> bool {
        if !self.lightbox.close() {
            return false;
        }
        self.inline_at_close = self.carousel.index();
        true
    }

    /// Handle one host event
    pub fn handle(&mut self, event: GalleryEvent) -> GalleryResponse {
        match event {
            GalleryEvent::PointerDown { view, x } => {
                if !self.accepts(view) {
                    return GalleryResponse::ignored();
                }
                match view {
                    View::Inline => self.carousel.drag_start(x),
                    View::Lightbox => self.lightbox.drag_start(x),
                }
                GalleryResponse::default()
            }

            GalleryEvent::PointerMove { view, x } => {
                if !self.accepts(view) {
                    return GalleryResponse::ignored();
                }
                let dragging = match view {
                    View::Inline => {
                        self.carousel.drag_move(x);
                        self.carousel.gesture().is_dragging()
                    }
                    View::Lightbox => {
                        self.lightbox.drag_move(x);
                        self.lightbox.gesture().is_dragging()
                    }
                };
                GalleryResponse::changed(dragging)
            }

            GalleryEvent::PointerUp { view } => {
                if !self.accepts(view) {
                    return GalleryResponse::ignored();
                }
                let (was_dragging, outcome) = match view {
                    View::Inline => (self.carousel.gesture().is_dragging(), self.carousel.drag_end()),
                    View::Lightbox => (self.lightbox.gesture().is_dragging(), self.lightbox.drag_end()),
                };
                GalleryResponse {
                    changed: was_dragging || outcome.delta() != 0,
                    ignored: false,
                    outcome: Some(outcome),
                }
            }

            GalleryEvent::PointerCancel => {
                let was_dragging = self.snapshot().dragging;
                self.cancel_gestures();
                GalleryResponse {
                    changed: was_dragging,
                    ignored: false,
                    outcome: was_dragging.then_some(GestureOutcome::Cancelled),
                }
            }

            GalleryEvent::Click(control) => self.click(control),
        }
    }

    fn click(&mut self, control: Control) -> GalleryResponse {
        // A discrete click always recovers from a gesture that never ended
        let was_dragging = self.snapshot().dragging;
        self.cancel_gestures();

        if !self.accepts(control.view()) {
            tracing::trace!("Ignoring {:?}: view not interactive", control);
            let mut response = GalleryResponse::ignored();
            response.changed = was_dragging;
            return response;
        }

        let changed = match control {
            Control::Previous => self.carousel.previous(),
            Control::Next => self.carousel.next(),
            Control::Thumbnail(i) | Control::Dot(i) => self.carousel.go_to(i),
            Control::MainImage => self.open_lightbox(),
            Control::Close => self.close_lightbox(),
            Control::LightboxPrevious => self.lightbox.previous(),
            Control::LightboxNext => self.lightbox.next(),
        };

        GalleryResponse::changed(changed || was_dragging)
    }

    /// Execute a keyboard/scripted command against the interactive view
    pub fn execute(&mut self, cmd: &Command) -> bool {
        self.cancel_gestures();
        let in_lightbox = self.lightbox.is_open();

        match cmd.id.as_str() {
            CommandId::GALLERY_NEXT if in_lightbox => self.lightbox.next(),
            CommandId::GALLERY_NEXT => self.carousel.next(),
            CommandId::GALLERY_PREV if in_lightbox => self.lightbox.previous(),
            CommandId::GALLERY_PREV => self.carousel.previous(),
            CommandId::GALLERY_FIRST if in_lightbox => self.lightbox.first(),
            CommandId::GALLERY_FIRST => self.carousel.first(),
            CommandId::GALLERY_LAST if in_lightbox => self.lightbox.last(),
            CommandId::GALLERY_LAST => self.carousel.last(),
            CommandId::GALLERY_GOTO => match cmd.params.index {
                Some(i) if !in_lightbox => self.carousel.go_to(i),
                Some(_) => {
                    tracing::debug!("gallery.goto ignored while the lightbox is open");
                    false
                }
                None => {
                    tracing::warn!("gallery.goto without an index");
                    false
                }
            },
            CommandId::LIGHTBOX_OPEN => !in_lightbox && self.open_lightbox(),
            CommandId::LIGHTBOX_CLOSE => self.close_lightbox(),
            CommandId::LIGHTBOX_TOGGLE if in_lightbox => self.close_lightbox(),
            CommandId::LIGHTBOX_TOGGLE => self.open_lightbox(),
            other => {
                tracing::warn!("Unknown command: {}", other);
                false
            }
        }
    }

    fn accepts(&self, view: View) -> bool {
        view == self.interactive_view()
    }

    fn cancel_gestures(&mut self) {
        self.carousel.drag_cancel();
        self.lightbox.drag_cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageDescriptor> {
        (0..n)
            .map(|i| ImageDescriptor::new(&format!("{i}.jpg")).with_id(&format!("img-{i}")))
            .collect()
    }

    fn gallery(n: usize) -> Gallery {
        Gallery::with_images(GalleryConfig::default(), None, &images(n))
    }

    fn gallery_with_policy(n: usize, reopen: ReopenPolicy) -> Gallery {
        let mut config = GalleryConfig::default();
        config.lightbox.reopen = reopen;
        Gallery::with_images(config, None, &images(n))
    }

    fn swipe(g: &mut Gallery, view: View, from: f32, to: f32) -> GalleryResponse {
        g.handle(GalleryEvent::PointerDown { view, x: from });
        g.handle(GalleryEvent::PointerMove { view, x: to });
        g.handle(GalleryEvent::PointerUp { view })
    }

    fn click(g: &mut Gallery, control: Control) -> GalleryResponse {
        g.handle(GalleryEvent::Click(control))
    }

    #[test]
    fn test_end_to_end_resume_policy() {
        let mut g = gallery_with_policy(4, ReopenPolicy::Resume);
        assert_eq!(g.snapshot().index, Some(0));

        click(&mut g, Control::Next);
        click(&mut g, Control::Next);
        assert_eq!(g.snapshot().index, Some(2));

        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().lightbox_index, Some(2));

        let r = swipe(&mut g, View::Lightbox, 300.0, 200.0);
        assert_eq!(r.outcome.map(|o| o.delta()), Some(1));
        assert_eq!(g.snapshot().lightbox_index, Some(3));

        assert!(!click(&mut g, Control::LightboxNext).changed);
        assert_eq!(g.snapshot().lightbox_index, Some(3));

        click(&mut g, Control::Close);
        assert!(!g.snapshot().lightbox_open);
        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().lightbox_index, Some(3));
        // Inline index never followed the overlay
        assert_eq!(g.snapshot().index, Some(2));
    }

    #[test]
    fn test_end_to_end_follow_inline_policy() {
        let mut g = gallery_with_policy(4, ReopenPolicy::FollowInline);
        click(&mut g, Control::Next);
        click(&mut g, Control::Next);
        click(&mut g, Control::MainImage);
        swipe(&mut g, View::Lightbox, 300.0, 200.0);
        assert_eq!(g.snapshot().lightbox_index, Some(3));

        click(&mut g, Control::Close);
        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().lightbox_index, Some(2));
    }

    #[test]
    fn test_default_reopen_follows_thumbnail_choice() {
        let mut g = gallery(5);
        click(&mut g, Control::MainImage);
        click(&mut g, Control::Close);

        click(&mut g, Control::Thumbnail(3));
        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().index, Some(3));
        assert_eq!(g.snapshot().lightbox_index, Some(3));
    }

    #[test]
    fn test_resume_abandoned_once_inline_moves() {
        let mut g = gallery_with_policy(5, ReopenPolicy::Resume);
        click(&mut g, Control::MainImage);
        click(&mut g, Control::LightboxNext);
        click(&mut g, Control::Close);

        // Untouched strip: resume at the overlay's slide
        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().lightbox_index, Some(1));
        click(&mut g, Control::Close);

        click(&mut g, Control::Thumbnail(3));
        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().lightbox_index, Some(3));
    }

    #[test]
    fn test_show_image_by_id() {
        let mut g = gallery(4);
        assert!(g.show_image(&ImageId::new("img-2")));
        assert_eq!(g.snapshot().index, Some(2));
        assert!(!g.show_image(&ImageId::new("img-2")));
        assert!(!g.show_image(&ImageId::new("missing")));
        assert_eq!(g.snapshot().index, Some(2));
    }

    #[test]
    fn test_lightbox_seeded_from_inline_on_first_open() {
        let mut g = gallery(5);
        click(&mut g, Control::Dot(2));
        click(&mut g, Control::MainImage);
        assert_eq!(g.snapshot().lightbox_index, Some(2));
        assert_eq!(g.snapshot().counter, Some((3, 5)));
    }

    #[test]
    fn test_inline_is_inert_while_lightbox_open() {
        let mut g = gallery(4);
        click(&mut g, Control::MainImage);

        assert!(click(&mut g, Control::Next).ignored);
        assert!(click(&mut g, Control::Thumbnail(3)).ignored);
        assert!(swipe(&mut g, View::Inline, 300.0, 100.0).ignored);
        assert_eq!(g.snapshot().index, Some(0));
        assert_eq!(g.snapshot().lightbox_index, Some(0));
    }

    #[test]
    fn test_lightbox_controls_ignored_while_closed() {
        let mut g = gallery(4);
        assert!(click(&mut g, Control::LightboxNext).ignored);
        assert!(swipe(&mut g, View::Lightbox, 300.0, 100.0).ignored);
        assert_eq!(g.snapshot().lightbox_index, None);
    }

    #[test]
    fn test_gesture_threshold_scenarios() {
        let mut g = gallery(3);
        let r = swipe(&mut g, View::Inline, 100.0, 140.0);
        assert_eq!(r.outcome, Some(GestureOutcome::Tap));
        assert_eq!(g.snapshot().index, Some(0));

        swipe(&mut g, View::Inline, 100.0, 40.0);
        assert_eq!(g.snapshot().index, Some(1));

        click(&mut g, Control::Next);
        let r = swipe(&mut g, View::Inline, 100.0, 40.0);
        assert_eq!(r.outcome, Some(GestureOutcome::Snapback));
        assert!(r.changed);
        assert_eq!(g.snapshot().index, Some(2));
    }

    #[test]
    fn test_configured_threshold_applies() {
        let mut config = GalleryConfig::default();
        config.gesture.commit_threshold_px = 100.0;
        let mut g = Gallery::with_images(config, None, &images(3));
        swipe(&mut g, View::Inline, 200.0, 140.0);
        assert_eq!(g.snapshot().index, Some(0));
    }

    #[test]
    fn test_offsets_follow_drag_then_reset() {
        let mut g = gallery(3);
        click(&mut g, Control::Next);
        g.handle(GalleryEvent::PointerDown { view: View::Inline, x: 200.0 });
        g.handle(GalleryEvent::PointerMove { view: View::Inline, x: 170.0 });

        let live = g.slide_offsets(View::Inline);
        assert_eq!(live[1], SlideOffset { percent: 0.0, pixels: -30.0 });
        assert_eq!(live[2].percent, 100.0);
        assert!(g.snapshot().dragging);

        g.handle(GalleryEvent::PointerUp { view: View::Inline });
        assert!(g.slide_offsets(View::Inline).iter().all(|o| o.pixels == 0.0));
        assert!(!g.snapshot().dragging);
    }

    #[test]
    fn test_missing_gesture_end_recovered_by_click() {
        let mut g = gallery(4);
        g.handle(GalleryEvent::PointerDown { view: View::Inline, x: 300.0 });
        g.handle(GalleryEvent::PointerMove { view: View::Inline, x: 100.0 });

        let r = click(&mut g, Control::Thumbnail(2));
        assert!(r.changed);
        assert!(!g.snapshot().dragging);
        assert_eq!(g.snapshot().index, Some(2));

        // A late pointer-up must not commit the abandoned drag
        let r = g.handle(GalleryEvent::PointerUp { view: View::Inline });
        assert_eq!(r.outcome, Some(GestureOutcome::Tap));
        assert_eq!(g.snapshot().index, Some(2));
    }

    #[test]
    fn test_pointer_cancel_commits_nothing() {
        let mut g = gallery(4);
        g.handle(GalleryEvent::PointerDown { view: View::Inline, x: 300.0 });
        g.handle(GalleryEvent::PointerMove { view: View::Inline, x: 100.0 });
        let r = g.handle(GalleryEvent::PointerCancel);
        assert_eq!(r.outcome, Some(GestureOutcome::Cancelled));
        assert_eq!(g.snapshot().index, Some(0));
        assert!(!g.snapshot().dragging);
    }

    #[test]
    fn test_boundaries_and_idempotence() {
        let mut g = gallery(3);
        assert!(!click(&mut g, Control::Previous).changed);
        assert!(!click(&mut g, Control::Dot(0)).changed);
        click(&mut g, Control::Thumbnail(7));
        assert_eq!(g.snapshot().index, Some(2));
        assert!(!g.snapshot().can_next);
        assert!(!click(&mut g, Control::Next).changed);
    }

    #[test]
    fn test_empty_gallery_is_placeholder() {
        let mut g = gallery(0);
        let snap = g.snapshot();
        assert!(snap.is_placeholder());
        assert_eq!(snap.index, None);

        assert!(!click(&mut g, Control::Next).changed);
        assert!(!click(&mut g, Control::MainImage).changed);
        assert!(!g.snapshot().lightbox_open);
        assert!(g.slide_offsets(View::Inline).is_empty());
    }

    #[test]
    fn test_preferred_image_leads() {
        let base = images(3);
        let preferred = base[2].clone();
        let g = Gallery::with_images(GalleryConfig::default(), Some(&preferred), &base);
        assert_eq!(g.images().len(), 3);
        assert_eq!(g.images()[0], preferred);
    }

    #[test]
    fn test_shrinking_list_clamps_both_indices() {
        let mut g = gallery(5);
        click(&mut g, Control::Thumbnail(4));
        click(&mut g, Control::MainImage);

        assert!(g.set_images(None, &images(2)));
        let snap = g.snapshot();
        assert_eq!(snap.index, Some(1));
        assert_eq!(snap.lightbox_index, Some(1));

        assert!(!g.set_images(None, &images(2)));
    }

    #[test]
    fn test_commands_target_interactive_view() {
        let mut g = gallery(4);
        assert!(g.execute(&Command::new(CommandId::GALLERY_LAST)));
        assert_eq!(g.snapshot().index, Some(3));

        assert!(g.execute(&Command::new(CommandId::LIGHTBOX_OPEN)));
        assert!(g.execute(&Command::new(CommandId::GALLERY_FIRST)));
        assert_eq!(g.snapshot().lightbox_index, Some(0));
        assert_eq!(g.snapshot().index, Some(3));

        assert!(!g.execute(&Command::new(CommandId::GALLERY_GOTO).with_index(1)));
        assert!(g.execute(&Command::new(CommandId::LIGHTBOX_TOGGLE)));
        assert!(!g.snapshot().lightbox_open);

        assert!(g.execute(&Command::new(CommandId::GALLERY_GOTO).with_index(1)));
        assert_eq!(g.snapshot().index, Some(1));
        assert!(!g.execute(&Command::new("gallery.shuffle")));
    }
}
