//! Gallery theming

use egui::{Color32, Visuals};

/// Gallery theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    /// Page background
    pub background: Color32,
    /// Slide backdrop and placeholder fill
    pub surface: Color32,
    /// Arrow buttons and inactive dots
    pub primary: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    /// Active thumbnail ring and active dot
    pub accent: Color32,
    /// Lightbox backdrop
    pub overlay: Color32,
    pub error: Color32,
}

impl Theme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(32, 32, 32),
            surface: Color32::from_rgb(48, 48, 48),
            primary: Color32::from_rgb(64, 64, 64),
            text: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(100, 149, 237), // Cornflower blue
            overlay: Color32::from_black_alpha(242),
            error: Color32::from_rgb(220, 80, 80),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(250, 250, 250),
            surface: Color32::from_rgb(235, 235, 235),
            primary: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(32, 32, 32),
            text_secondary: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(59, 130, 246), // Blue
            overlay: Color32::from_black_alpha(242),
            error: Color32::from_rgb(220, 38, 38),
        }
    }

    /// Storefront palette: navy text, cream backdrop, gold highlights
    pub fn brand() -> Self {
        Self {
            name: "brand".to_string(),
            background: Color32::WHITE,
            surface: Color32::from_rgb(0xF5, 0xF2, 0xEA),   // cream
            primary: Color32::from_white_alpha(230),
            text: Color32::from_rgb(0x1A, 0x2A, 0x3A),      // navy
            text_secondary: Color32::from_rgb(0x8C, 0x8C, 0x8C),
            accent: Color32::from_rgb(0xC3, 0xA3, 0x43),    // gold
            overlay: Color32::from_black_alpha(242),
            error: Color32::from_rgb(220, 38, 38),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// Inactive dot colour (text at 30%)
    pub fn dot_inactive(&self) -> Color32 {
        self.text.gamma_multiply(0.3)
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.surface;

        visuals.widgets.noninteractive.fg_stroke.color = self.text;

        visuals.widgets.inactive.weak_bg_fill = self.primary;
        visuals.widgets.inactive.bg_fill = self.primary;
        visuals.widgets.inactive.fg_stroke.color = self.text;

        visuals.widgets.hovered.weak_bg_fill = self.primary;
        visuals.widgets.hovered.fg_stroke.color = self.text;

        visuals.widgets.active.bg_fill = self.accent.linear_multiply(0.5);
        visuals.widgets.active.fg_stroke.color = self.text;

        visuals.selection.bg_fill = self.accent.linear_multiply(0.3);
        visuals.selection.stroke.color = self.accent;

        style.visuals = visuals;
        ctx.set_style(style);
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => Self::brand(),
        }
    }

    /// Replace the accent with a hex colour; unparsable values keep the palette's
    pub fn with_accent(mut self, hex: Option<&str>) -> Self {
        if let Some(hex) = hex {
            match Self::parse_color(hex) {
                Some(color) => self.accent = color,
                None => tracing::warn!("Ignoring invalid accent colour {:?}", hex),
            }
        }
        self
    }

    /// Parse a hex color string
    pub fn parse_color(hex: &str) -> Option<Color32> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color32::from_rgba_unmultiplied(
                channel(2)?,
                channel(4)?,
                channel(6)?,
                channel(0)?,
            )),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::brand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("DARK").name, "dark");
        assert_eq!(Theme::by_name("light").name, "light");
        assert_eq!(Theme::by_name("anything").name, "brand");
    }

    #[test]
    fn test_brand_palette_matches_hex() {
        let brand = Theme::brand();
        assert_eq!(Theme::parse_color("#C3A343"), Some(brand.accent));
        assert_eq!(Theme::parse_color("F5F2EA"), Some(brand.surface));
        assert_eq!(Theme::parse_color("#1A2A3A"), Some(brand.text));
    }

    #[test]
    fn test_accent_override() {
        let theme = Theme::dark().with_accent(Some("#C3A343"));
        assert_eq!(theme.accent, Theme::brand().accent);
        assert_eq!(theme.surface, Theme::dark().surface);

        assert_eq!(Theme::light().with_accent(Some("gold")), Theme::light());
        assert_eq!(Theme::light().with_accent(None), Theme::light());
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert_eq!(Theme::parse_color("#12345"), None);
        assert_eq!(Theme::parse_color("zzzzzz"), None);
        assert_eq!(
            Theme::parse_color("#80FF0000"),
            Some(Color32::from_rgba_unmultiplied(255, 0, 0, 128))
        );
    }
}
