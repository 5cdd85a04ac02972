//! Keyboard input and keybinding resolution

use gallery_core::Command;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Input handler that maps keys to gallery commands
pub struct InputHandler {
    /// Key bindings: key string -> command ID
    bindings: HashMap<String, String>,

    /// Current modifier state
    modifiers: ModifiersState,
}

impl InputHandler {
    /// Create a new input handler from `command -> keys` bindings
    pub fn new(bindings: HashMap<String, Vec<String>>) -> Self {
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            for key in keys {
                key_to_command.insert(key.to_lowercase(), command.clone());
            }
        }

        Self {
            bindings: key_to_command,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Update modifier state
    pub fn update_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Handle a key event and return the corresponding command
    pub fn handle_key(&self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }

        let key_str = key_to_string(&event.logical_key);
        if key_str.is_empty() {
            return None;
        }

        self.resolve(&key_str)
    }

    /// Look up a key name (without modifiers) under the current modifier state
    pub fn resolve(&self, key: &str) -> Option<Command> {
        let full_key = self.build_key_string(key);
        tracing::debug!("Key pressed: {}", full_key);

        self.bindings
            .get(&full_key.to_lowercase())
            .map(|cmd_id| Command::new(cmd_id))
    }

    /// Build a key string with modifiers
    fn build_key_string(&self, key: &str) -> String {
        let mut parts = Vec::new();

        if self.modifiers.control_key() {
            parts.push("Ctrl");
        }
        if self.modifiers.alt_key() {
            parts.push("Alt");
        }
        if self.modifiers.shift_key() {
            parts.push("Shift");
        }
        if self.modifiers.super_key() {
            parts.push("Super");
        }

        parts.push(key);
        parts.join("+")
    }
}

/// Convert a logical key to its binding name
fn key_to_string(key: &Key) -> String {
    match key {
        Key::Named(named) => match named {
            NamedKey::Space => "Space".to_string(),
            NamedKey::Enter => "Return".to_string(),
            NamedKey::Escape => "Escape".to_string(),
            NamedKey::Home => "Home".to_string(),
            NamedKey::End => "End".to_string(),
            NamedKey::ArrowLeft => "Left".to_string(),
            NamedKey::ArrowRight => "Right".to_string(),
            NamedKey::ArrowUp => "Up".to_string(),
            NamedKey::ArrowDown => "Down".to_string(),
            _ => format!("{:?}", named),
        },
        Key::Character(c) => c.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{CommandId, GalleryConfig};

    fn handler() -> InputHandler {
        InputHandler::new(GalleryConfig::default().effective_keybindings())
    }

    #[test]
    fn test_default_bindings() {
        let h = handler();
        assert!(h.resolve("Right").unwrap().is(CommandId::GALLERY_NEXT));
        assert!(h.resolve("h").unwrap().is(CommandId::GALLERY_PREV));
        assert!(h.resolve("Escape").unwrap().is(CommandId::LIGHTBOX_CLOSE));
        assert!(h.resolve("Return").unwrap().is(CommandId::LIGHTBOX_OPEN));
        assert!(h.resolve("z").is_none());
    }

    #[test]
    fn test_bindings_are_case_insensitive() {
        assert!(handler().resolve("RIGHT").is_some());
    }

    #[test]
    fn test_modifiers_change_the_key() {
        let mut h = handler();
        h.update_modifiers(ModifiersState::CONTROL);
        assert!(h.resolve("Right").is_none());

        let mut bindings = HashMap::new();
        bindings.insert(CommandId::GALLERY_LAST.to_string(), vec!["Ctrl+Right".to_string()]);
        let mut h = InputHandler::new(bindings);
        h.update_modifiers(ModifiersState::CONTROL);
        assert!(h.resolve("Right").unwrap().is(CommandId::GALLERY_LAST));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_to_string(&Key::Named(NamedKey::Enter)), "Return");
        assert_eq!(key_to_string(&Key::Named(NamedKey::ArrowLeft)), "Left");
        assert_eq!(key_to_string(&Key::Character("l".into())), "l");
    }
}
