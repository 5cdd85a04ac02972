//! Gallery error types
//!
//! Navigation itself never fails; these cover the host-facing paths
//! (configuration, manifests, image decoding).

use thiserror::Error;

/// Main gallery error type
#[derive(Error, Debug)]
pub enum GalleryError {
    // ===== Recoverable Errors (notify user, continue) =====
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    // ===== Fatal Errors (application termination) =====
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization failed: {0}")]
    Init(String),
}

impl GalleryError {
    /// Is this error recoverable?
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GalleryError::Io(_)
                | GalleryError::ImageNotFound(_)
                | GalleryError::ImageDecode(_)
                | GalleryError::Manifest(_)
        )
    }

    /// Is this a fatal error?
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            GalleryError::ImageNotFound(url) => format!("Image not found: {}", url),
            GalleryError::ImageDecode(msg) => format!("Cannot load image: {}", msg),
            GalleryError::Manifest(e) => format!("The gallery manifest is invalid: {}", e),
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for GalleryError {
    fn from(e: toml::de::Error) -> Self {
        GalleryError::Config(e.to_string())
    }
}

impl From<image::ImageError> for GalleryError {
    fn from(e: image::ImageError) -> Self {
        GalleryError::ImageDecode(e.to_string())
    }
}
