//! UI Components

pub mod carousel_view;
pub mod controls;
pub mod lightbox_view;
pub mod slides;
pub mod status_bar;

pub use carousel_view::{tap_follow_up, CarouselView, Indicators, COMPACT_WIDTH};
pub use lightbox_view::{counter_label, LightboxView};
pub use slides::{fit_rect, placeholder_rect, Slide, SlideFit, SlidePainter, SlideTextures};
pub use status_bar::{StatusBar, StatusInfo};
