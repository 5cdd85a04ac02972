//! Command system for keyboard and scripted actions

use serde::{Deserialize, Serialize};

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Navigation commands (apply to the lightbox while it is open)
    pub const GALLERY_NEXT: &'static str = "gallery.next";
    pub const GALLERY_PREV: &'static str = "gallery.prev";
    pub const GALLERY_FIRST: &'static str = "gallery.first";
    pub const GALLERY_LAST: &'static str = "gallery.last";
    pub const GALLERY_GOTO: &'static str = "gallery.goto";

    // Lightbox commands
    pub const LIGHTBOX_OPEN: &'static str = "lightbox.open";
    pub const LIGHTBOX_CLOSE: &'static str = "lightbox.close";
    pub const LIGHTBOX_TOGGLE: &'static str = "lightbox.toggle";

    // App commands
    pub const APP_EXIT: &'static str = "app.exit";
}

/// Command with optional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub id: CommandId,
    pub params: CommandParams,
}

/// Command parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandParams {
    /// Target slide for `gallery.goto`
    pub index: Option<usize>,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self {
            id: CommandId::new(id),
            params: CommandParams::default(),
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.params.index = Some(index);
        self
    }

    pub fn is(&self, id: &str) -> bool {
        self.id.as_str() == id
    }
}
