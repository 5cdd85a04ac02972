//! Image descriptors and the deduplicated display list

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

/// Opaque image identifier supplied by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub String);

impl ImageId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single image as resolved by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    #[serde(default)]
    pub id: Option<ImageId>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageDescriptor {
    pub fn new(url: &str) -> Self {
        Self {
            id: None,
            url: url.to_string(),
            alt_text: None,
            width: None,
            height: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(ImageId::new(id));
        self
    }

    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt_text = Some(alt.to_string());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Alt text, or `fallback` when missing or blank
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alt_text.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => fallback,
        }
    }

    /// Width / height, when both are known
    pub fn aspect_ratio(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(w as f32 / h as f32),
            _ => None,
        }
    }

    /// Stable render key: the id, or the position for anonymous images
    pub fn key(&self, position: usize) -> String {
        match &self.id {
            Some(id) => format!("image-{}", id),
            None => format!("image-{}", position),
        }
    }
}

/// Ordered image sequence shared by the inline strip and the lightbox.
///
/// No two entries share an id. Entries without an id are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    images: Vec<ImageDescriptor>,
}

impl DisplayList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    pub fn as_slice(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Position of the image with the given id
    pub fn position_of(&self, id: &ImageId) -> Option<usize> {
        self.images
            .iter()
            .position(|img| img.id.as_ref() == Some(id))
    }
}

impl Deref for DisplayList {
    type Target = [ImageDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.images
    }
}

/// Merge the preferred image in front of `base`, dropping repeated ids.
///
/// Runs in O(n) over `base`. The first occurrence of an id wins, so the
/// preferred image always keeps the leading slot.
pub fn normalize(preferred: Option<&ImageDescriptor>, base: &[ImageDescriptor]) -> DisplayList {
    let mut images = Vec::with_capacity(base.len() + usize::from(preferred.is_some()));
    let mut seen: HashSet<&ImageId> = HashSet::with_capacity(base.len() + 1);

    if let Some(first) = preferred {
        if let Some(id) = &first.id {
            seen.insert(id);
        }
        images.push(first.clone());
    }

    for image in base {
        match &image.id {
            Some(id) if !seen.insert(id) => {
                tracing::trace!("Dropping duplicate image id {}", id);
            }
            _ => images.push(image.clone()),
        }
    }

    tracing::debug!(
        "Display list normalized: {} base, preferred={}, {} shown",
        base.len(),
        preferred.is_some(),
        images.len()
    );

    DisplayList { images }
}
