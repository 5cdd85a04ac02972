//! Decoding gallery images from local sources
//!
//! The host resolves each descriptor's `url` against the manifest directory
//! and decodes it once up front. Remote URLs are never fetched.

use crate::display_list::{DisplayList, ImageDescriptor};
use crate::GalleryError;
use image::{GenericImageView, ImageReader};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Decoded RGBA8 pixels for one slide
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Map a descriptor URL to a local path.
///
/// Accepts plain paths (relative to `base_dir`) and `file://` URLs.
/// Returns `None` for remote schemes.
pub fn resolve_source(base_dir: &Path, url: &str) -> Option<PathBuf> {
    if let Some(path) = url.strip_prefix("file://") {
        return Some(PathBuf::from(path));
    }

    if url.contains("://") {
        tracing::warn!("Skipping remote image: {}", url);
        return None;
    }

    let path = Path::new(url);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(base_dir.join(path))
    }
}

/// Decode an image, shrinking it so neither edge exceeds `max_edge`
pub fn load_image(path: &Path, max_edge: Option<u32>) -> Result<LoadedImage, GalleryError> {
    tracing::debug!("Loading image: {:?}", path);

    if !path.exists() {
        return Err(GalleryError::ImageNotFound(path.display().to_string()));
    }

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let img = match max_edge {
        Some(edge) => {
            let (w, h) = img.dimensions();
            if w > edge || h > edge {
                img.thumbnail(edge, edge)
            } else {
                img
            }
        }
        None => img,
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        source: path.to_path_buf(),
        width,
        height,
        data: rgba.into_raw(),
    })
}

/// Decode one descriptor
pub fn load_descriptor(
    base_dir: &Path,
    descriptor: &ImageDescriptor,
    max_edge: Option<u32>,
) -> Result<LoadedImage, GalleryError> {
    let path = resolve_source(base_dir, &descriptor.url)
        .ok_or_else(|| GalleryError::ImageNotFound(descriptor.url.clone()))?;
    load_image(&path, max_edge)
}

/// Decode every slide of the list in parallel, preserving order
pub fn load_display_list(
    list: &DisplayList,
    base_dir: &Path,
    max_edge: Option<u32>,
) -> Vec<Result<LoadedImage, GalleryError>> {
    list.as_slice()
        .par_iter()
        .map(|descriptor| load_descriptor(base_dir, descriptor, max_edge))
        .collect()
}

/// Check if a file is a supported image format
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            matches!(
                e.to_lowercase().as_str(),
                "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp"
            )
        })
        .unwrap_or(false)
}
