//! JSON manifest describing the images of one item

use crate::display_list::{normalize, DisplayList, ImageDescriptor};
use crate::GalleryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `{ "preferred": {...}?, "images": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryManifest {
    #[serde(default)]
    pub preferred: Option<ImageDescriptor>,
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

impl GalleryManifest {
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&content)?;
        tracing::info!(
            "Manifest loaded from {:?}: {} images",
            path,
            manifest.images.len()
        );
        Ok(manifest)
    }

    pub fn parse(json: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn display_list(&self) -> DisplayList {
        normalize(self.preferred.as_ref(), &self.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_preferred() {
        let manifest = GalleryManifest::parse(
            r#"{
                "preferred": {"id": "v2", "url": "variant.jpg", "altText": "Blue"},
                "images": [
                    {"id": "v1", "url": "front.jpg"},
                    {"id": "v2", "url": "variant.jpg"},
                    {"url": "detail.jpg"}
                ]
            }"#,
        )
        .unwrap();

        let list = manifest.display_list();
        let urls: Vec<&str> = list.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["variant.jpg", "front.jpg", "detail.jpg"]);
        assert_eq!(list[0].alt_text.as_deref(), Some("Blue"));
    }

    #[test]
    fn test_empty_object_is_empty_gallery() {
        let manifest = GalleryManifest::parse("{}").unwrap();
        assert!(manifest.display_list().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GalleryManifest::parse("[1, 2]"),
            Err(GalleryError::Manifest(_))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.json");
        std::fs::write(&path, r#"{"images":[{"url":"a.png"}]}"#).unwrap();
        assert_eq!(GalleryManifest::load(&path).unwrap().images.len(), 1);

        assert!(matches!(
            GalleryManifest::load(&dir.path().join("nope.json")),
            Err(GalleryError::Io(_))
        ));
    }
}
