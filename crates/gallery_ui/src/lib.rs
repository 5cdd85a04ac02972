//! Gallery UI Layer
//!
//! Provides:
//! - egui views for the inline carousel and the lightbox overlay
//! - wgpu presentation of egui frames
//! - Keyboard input mapping to gallery commands

pub mod components;
pub mod input;
pub mod renderer;
pub mod theme;

pub use input::InputHandler;
pub use renderer::Renderer;
pub use theme::Theme;
