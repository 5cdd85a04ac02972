//! Gallery configuration

use crate::command::CommandId;
use crate::gesture::DEFAULT_COMMIT_THRESHOLD_PX;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub gesture: GestureConfig,
    pub lightbox: LightboxConfig,
    pub view: ViewConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            lightbox: LightboxConfig::default(),
            view: ViewConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Drag distance (px) a swipe must exceed to navigate
    pub commit_threshold_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold_px: DEFAULT_COMMIT_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub reopen: ReopenPolicy,
    pub close_on_escape: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            reopen: ReopenPolicy::FollowInline,
            close_on_escape: true,
        }
    }
}

/// Which slide a reopened lightbox shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReopenPolicy {
    /// Continue from the slide shown when the lightbox was last closed,
    /// as long as the inline strip has not moved since
    #[serde(rename = "resume")]
    Resume,
    /// Always start from the inline carousel's current slide
    #[serde(rename = "follow_inline")]
    FollowInline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub theme: String,
    pub transition_ms: u64,
    pub show_thumbnails: bool,
    pub show_dots: bool,
    pub thumbnail_size: f32,
    /// Hex override for the theme accent, e.g. "#C3A343"
    pub accent_color: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            theme: "brand".to_string(),
            transition_ms: 300,
            show_thumbnails: true,
            show_dots: true,
            thumbnail_size: 80.0,
            accent_color: None,
        }
    }
}

impl GalleryConfig {
    /// Load configuration from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Keybindings with `lightbox.close_on_escape` applied
    pub fn effective_keybindings(&self) -> HashMap<String, Vec<String>> {
        let mut kb = self.keybindings.clone();
        if !self.lightbox.close_on_escape {
            if let Some(keys) = kb.get_mut(CommandId::LIGHTBOX_CLOSE) {
                keys.retain(|k| !k.eq_ignore_ascii_case("Escape"));
            }
        }
        kb
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "GalleryViewer", "GalleryViewer")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();

    kb.insert(CommandId::GALLERY_NEXT.into(), vec!["Right".into(), "l".into()]);
    kb.insert(CommandId::GALLERY_PREV.into(), vec!["Left".into(), "h".into()]);
    kb.insert(CommandId::GALLERY_FIRST.into(), vec!["Home".into()]);
    kb.insert(CommandId::GALLERY_LAST.into(), vec!["End".into()]);

    kb.insert(CommandId::LIGHTBOX_OPEN.into(), vec!["Return".into(), "Space".into()]);
    kb.insert(CommandId::LIGHTBOX_CLOSE.into(), vec!["Escape".into()]);
    kb.insert(CommandId::LIGHTBOX_TOGGLE.into(), vec!["f".into()]);

    kb.insert(CommandId::APP_EXIT.into(), vec!["q".into()]);

    kb
}
