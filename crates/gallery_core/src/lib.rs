//! Gallery Core Domain Logic
//!
//! This crate contains:
//! - Display list normalization (preferred image first, ids deduplicated)
//! - Gesture tracking with drag/tap disambiguation
//! - Inline carousel and lightbox index state
//! - Slide offset composition shared by both views
//! - The gallery controller, commands, configuration and error types
//!
//! Everything here is synchronous and single-threaded: the host feeds
//! input events in arrival order and reads back a snapshot plus offsets.

pub mod carousel;
pub mod command;
pub mod compositor;
pub mod config;
pub mod display_list;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod image_loader;
pub mod lightbox;
pub mod manifest;
pub mod navigation;

pub use carousel::Carousel;
pub use command::{Command, CommandId, CommandParams};
pub use compositor::{offset_for, offsets, SlideOffset};
pub use config::{GalleryConfig, GestureConfig, LightboxConfig, ReopenPolicy, ViewConfig};
pub use display_list::{normalize, DisplayList, ImageDescriptor, ImageId};
pub use error::GalleryError;
pub use gallery::{Control, Gallery, GalleryEvent, GalleryResponse, GallerySnapshot, View};
pub use gesture::{GestureOutcome, GesturePhase, GestureTracker, Step, DEFAULT_COMMIT_THRESHOLD_PX};
pub use image_loader::{is_supported_image, load_descriptor, load_display_list, load_image, resolve_source, LoadedImage};
pub use lightbox::Lightbox;
pub use manifest::GalleryManifest;
pub use navigation::SlideIndex;
