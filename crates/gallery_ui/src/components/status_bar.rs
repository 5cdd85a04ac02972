//! Status bar component

use egui::Ui;
use gallery_core::GallerySnapshot;

/// Status bar information
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    /// Alt text of the current slide
    pub caption: String,

    /// Current index / total
    pub position: String,

    /// Image dimensions
    pub dimensions: String,

    /// Additional status message
    pub message: String,
}

impl StatusInfo {
    /// Position text for the inline carousel
    pub fn position_of(snapshot: &GallerySnapshot) -> String {
        match snapshot.index {
            Some(i) => format!("{} / {}", i + 1, snapshot.len),
            None => String::new(),
        }
    }
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn ui(ui: &mut Ui, info: &StatusInfo) {
        ui.horizontal(|ui| {
            ui.label(&info.caption);

            if !info.position.is_empty() {
                ui.separator();
                ui.label(&info.position);
            }

            if !info.dimensions.is_empty() {
                ui.separator();
                ui.label(&info.dimensions);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !info.message.is_empty() {
                    ui.label(&info.message);
                }
            });
        });
    }
}
