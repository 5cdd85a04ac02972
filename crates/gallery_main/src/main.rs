//! Gallery Viewer - synchronized carousel and lightbox
//!
//! Usage: `gallery_viewer [manifest.json]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::{Context, Result};
use gallery_core::{GalleryConfig, GalleryManifest};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    let _log_guard = gallery_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = gallery_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Gallery viewer starting...");

    let config = GalleryConfig::load().unwrap_or_default();

    let (manifest, base_dir) = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => startup_manifest(&path)?,
        None => {
            tracing::info!("No manifest given, drop one onto the window");
            (GalleryManifest::default(), PathBuf::from("."))
        }
    };

    app::run(config, manifest, base_dir)
}

/// Manifest named on the command line; a recoverable failure starts an empty gallery
fn startup_manifest(path: &Path) -> Result<(GalleryManifest, PathBuf)> {
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    match GalleryManifest::load(path) {
        Ok(manifest) => Ok((manifest, base_dir)),
        Err(e) if e.is_fatal() => {
            Err(e).with_context(|| format!("reading manifest {}", path.display()))
        }
        Err(e) => {
            tracing::warn!("{}; starting with an empty gallery", e.user_message());
            Ok((GalleryManifest::default(), base_dir))
        }
    }
}
